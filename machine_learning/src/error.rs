use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::initialization::RandErr;

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug)]
pub enum MlErr {
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    DimensionMismatch {
        got: usize,
        expected: usize,
    },
    EmptyDataset,
    /// A sample with a NaN or infinite feature or label.
    NonFiniteSample,
    NoValidRows,
    InvalidInit(RandErr),
    InvalidLearningRate(f64),
    MalformedHistory {
        row: usize,
        reason: String,
    },
    Csv(csv::Error),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            MlErr::DimensionMismatch { got, expected } => write!(
                f,
                "Samples have {got} features but the weights were initialized for {expected}"
            ),
            MlErr::EmptyDataset => write!(f, "The dataset has no samples"),
            MlErr::NonFiniteSample => {
                write!(f, "Samples must only contain finite features and labels")
            }
            MlErr::NoValidRows => write!(f, "No valid rows found in CSV"),
            MlErr::InvalidInit(e) => write!(f, "Failed to initialize the weights: {e}"),
            MlErr::InvalidLearningRate(lr) => {
                write!(f, "The learning rate must be positive and finite, got {lr}")
            }
            MlErr::MalformedHistory { row, reason } => {
                write!(f, "Malformed history at row {row}: {reason}")
            }
            MlErr::Csv(e) => write!(f, "csv error: {e}"),
        }
    }
}

impl Error for MlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlErr::InvalidInit(e) => Some(e),
            MlErr::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RandErr> for MlErr {
    fn from(value: RandErr) -> Self {
        Self::InvalidInit(value)
    }
}

impl From<csv::Error> for MlErr {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}
