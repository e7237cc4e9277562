pub mod activations;
pub mod loss;
mod logistic;

pub use logistic::{DECISION_THRESHOLD, Logistic};
pub(crate) use logistic::check_dims;
