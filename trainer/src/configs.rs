use std::{fs, num::NonZeroUsize, path::Path};

use machine_learning::{
    initialization::{CSV_INIT_BOUND, InitMode},
    training::DEFAULT_LEARNING_RATE,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrainerError};

/// Iterations run when none are configured.
pub const DEFAULT_ITERATIONS: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// How the weights are filled before training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitKind {
    #[default]
    Zero,
    /// Uniform in `[-0.5, 0.5)`.
    Random,
}

impl InitKind {
    pub fn mode(&self) -> InitMode {
        match self {
            InitKind::Zero => InitMode::Zero,
            InitKind::Random => InitMode::Random {
                bound: CSV_INIT_BOUND,
            },
        }
    }
}

/// The hyperparameters of a CSV training run.
///
/// Every field is optional in JSON, missing ones take their default.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub iterations: NonZeroUsize,
    pub init: InitKind,
    /// Seeds the random initialization, a random seed is used if missing.
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
            init: InitKind::default(),
            seed: None,
        }
    }
}

impl TrainingConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    /// Returns an `Io` error if the file can't be read, `Json` if it can't be parsed and
    /// `InvalidConfig` if its values are out of range.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks the values serde can't.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.) {
            return Err(TrainerError::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }

        Ok(())
    }
}
