mod builder;
mod history;
mod trainer;

pub use builder::{DEFAULT_LEARNING_RATE, TrainerBuilder};
pub use history::{DECIMALS, History, HistoryRecord};
pub use trainer::{EpochReport, LogisticTrainer};
