pub mod configs;
pub mod error;
mod session;

pub use configs::{InitKind, TrainingConfig};
pub use error::{Result, TrainerError};
pub use session::{Session, TrainingReport};

/// Used when no data file is given: two linearly separable classes over two features.
pub const EXAMPLE_DATASET: &str = "\
2.7810836,2.550537003,0
1.465489372,2.362125076,0
3.396561688,4.400293529,0
1.38807019,1.850220317,0
3.06407232,3.005305973,0
7.627531214,2.759262235,1
5.332441248,2.088626775,1
6.922596716,1.77106367,1
8.675418651,-0.242068655,1
7.673756466,3.508563011,1
";

/// Trains a model on CSV rows and returns its report.
///
/// # Errors
/// Returns a `TrainerError` if the config is invalid or the data has no usable row.
pub fn train(config: TrainingConfig, csv: &str) -> Result<TrainingReport> {
    Session::new(config, csv)?.run()
}
