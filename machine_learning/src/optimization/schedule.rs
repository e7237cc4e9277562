/// Per-epoch decay applied when the learning rate schedule is enabled.
pub const DECAY_RATE: f64 = 0.05;

/// The learning rate to use on a given epoch.
///
/// With decay enabled it's `base / (1 + epoch · DECAY_RATE)`, otherwise `base`.
pub fn learning_rate_for_epoch(base: f64, epoch: usize, decay: bool) -> f64 {
    if decay {
        base / (1. + epoch as f64 * DECAY_RATE)
    } else {
        base
    }
}

/// A base learning rate and whether it decays with the epoch index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LrSchedule {
    base: f64,
    decay: bool,
}

impl LrSchedule {
    pub fn new(base: f64, decay: bool) -> Self {
        Self { base, decay }
    }

    /// A schedule that always yields `base`.
    pub fn constant(base: f64) -> Self {
        Self::new(base, false)
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn decays(&self) -> bool {
        self.decay
    }

    pub fn at(&self, epoch: usize) -> f64 {
        learning_rate_for_epoch(self.base, epoch, self.decay)
    }
}
