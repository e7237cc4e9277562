pub mod animation;
pub mod canvas;
pub mod classifier;
pub mod config;
pub mod error;
pub mod field;
pub mod points;
pub mod run;

pub use animation::{RunOutcome, animate};
pub use canvas::Canvas;
pub use classifier::Classifier;
pub use config::TrainConfig;
pub use error::{ClassifierErr, Result};
pub use points::{Clusters, Label, Point};
pub use run::{EpochReport, Status, TrainingRun};
