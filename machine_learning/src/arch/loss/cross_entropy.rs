use super::LossFn;

/// Added inside the logarithms so a saturated prediction never yields `ln(0)`.
pub const LOG_EPS: f64 = 1e-12;

/// Binary cross-entropy (negative log-likelihood) of a sigmoid output.
#[derive(Default, Clone, Copy, Debug)]
pub struct BinaryCrossEntropy;

impl BinaryCrossEntropy {
    /// Returns a new `BinaryCrossEntropy`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for BinaryCrossEntropy {
    fn loss(&self, prob: f64, target: f64) -> f64 {
        -(target * (prob + LOG_EPS).ln() + (1. - target) * (1. - prob + LOG_EPS).ln())
    }

    /// Composed with the sigmoid the chain rule collapses to `prob - target`.
    fn loss_prime(&self, prob: f64, target: f64) -> f64 {
        prob - target
    }
}
