use std::{
    error::Error,
    fmt::{self, Display},
};

use rand::distr::uniform::Error as UniformError;

/// The result type of the parameter generators.
pub type Result<T> = std::result::Result<T, RandErr>;

/// Error returned by the `RandParamGen` constructors whenever the requested interval
/// can't be sampled from.
#[derive(Debug)]
pub struct RandErr(String);

impl RandErr {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl From<UniformError> for RandErr {
    fn from(value: UniformError) -> Self {
        Self(value.to_string())
    }
}

impl Display for RandErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for RandErr {}
