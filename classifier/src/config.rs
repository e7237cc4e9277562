use std::{num::NonZeroUsize, time::Duration};

use machine_learning::training::DEFAULT_LEARNING_RATE;

/// Epochs per training run when none are given.
pub const DEFAULT_EPOCHS: NonZeroUsize = NonZeroUsize::new(20).unwrap();

/// Time between animated epochs when none is given.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(160);

/// Bounds of a single training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    learning_rate: f64,
    epochs: NonZeroUsize,
    auto_lr: bool,
    delay: Duration,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            auto_lr: false,
            delay: DEFAULT_DELAY,
        }
    }
}

impl TrainConfig {
    /// Creates a new training configuration.
    ///
    /// # Args
    /// * `learning_rate` - The base learning rate, replaced by the default if it isn't
    ///   positive and finite.
    /// * `epochs` - Number of epochs to run.
    /// * `auto_lr` - Whether the learning rate decays with each epoch.
    pub fn new(learning_rate: f64, epochs: NonZeroUsize, auto_lr: bool) -> Self {
        let learning_rate = if learning_rate.is_finite() && learning_rate > 0. {
            learning_rate
        } else {
            DEFAULT_LEARNING_RATE
        };

        Self {
            learning_rate,
            epochs,
            auto_lr,
            delay: DEFAULT_DELAY,
        }
    }

    /// Builds a configuration from raw form values, falling back to the defaults for
    /// anything that doesn't parse or isn't positive.
    ///
    /// Epochs are read from the input's leading digits, so `"2.5"` runs 2 epochs.
    pub fn from_inputs(learning_rate: &str, epochs: &str, auto_lr: bool) -> Self {
        let learning_rate = learning_rate
            .trim()
            .parse::<f64>()
            .unwrap_or(DEFAULT_LEARNING_RATE);

        let epochs = leading_int(epochs)
            .and_then(NonZeroUsize::new)
            .unwrap_or(DEFAULT_EPOCHS);

        Self::new(learning_rate, epochs, auto_lr)
    }

    /// Sets the time between animated epochs. A zero delay is raised to one millisecond.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay.max(Duration::from_millis(1));
        self
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn epochs(&self) -> usize {
        self.epochs.get()
    }

    pub fn auto_lr(&self) -> bool {
        self.auto_lr
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Parses the unsigned integer at the start of `input`, ignoring whatever follows it.
fn leading_int(input: &str) -> Option<usize> {
    let input = input.trim_start();
    let input = input.strip_prefix('+').unwrap_or(input);
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());

    input[..end].parse().ok()
}
