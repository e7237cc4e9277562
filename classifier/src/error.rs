use std::{error::Error, fmt};

use machine_learning::MlErr;

/// The classifier module's result type.
pub type Result<T> = std::result::Result<T, ClassifierErr>;

/// Classifier demo failures. None of them leave the classifier unusable.
#[derive(Debug)]
pub enum ClassifierErr {
    /// Training was requested with no points placed.
    NoPoints,
    /// The random cluster parameters can't be sampled from.
    InvalidClusters(String),
    Ml(MlErr),
}

impl fmt::Display for ClassifierErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierErr::NoPoints => write!(f, "there are no points to train on"),
            ClassifierErr::InvalidClusters(msg) => write!(f, "invalid clusters: {msg}"),
            ClassifierErr::Ml(e) => write!(f, "training error: {e}"),
        }
    }
}

impl Error for ClassifierErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClassifierErr::Ml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MlErr> for ClassifierErr {
    fn from(value: MlErr) -> Self {
        Self::Ml(value)
    }
}
