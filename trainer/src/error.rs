use std::fmt;

use machine_learning::MlErr;

/// The trainer's result type.
pub type Result<T> = std::result::Result<T, TrainerError>;

/// All errors that can occur while training from CSV.
#[derive(Debug)]
pub enum TrainerError {
    /// Invalid configuration, caught before touching the data.
    InvalidConfig(String),
    /// The data couldn't be parsed or trained on.
    Ml(MlErr),
    Io(std::io::Error),
    /// The configuration file isn't valid JSON for a `TrainingConfig`.
    Json(serde_json::Error),
}

impl fmt::Display for TrainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Ml(e) => write!(f, "training error: {e}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

impl std::error::Error for TrainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Ml(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<MlErr> for TrainerError {
    fn from(e: MlErr) -> Self {
        Self::Ml(e)
    }
}

impl From<std::io::Error> for TrainerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TrainerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
