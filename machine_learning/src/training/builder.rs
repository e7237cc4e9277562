use super::LogisticTrainer;
use crate::{
    arch::{Logistic, loss::BinaryCrossEntropy},
    error::{MlErr, Result},
    optimization::{GradientDescent, LrSchedule, OnlineAscent, Optimizer},
};

/// Learning rate used when none is configured.
pub const DEFAULT_LEARNING_RATE: f64 = 0.05;

/// Builds `LogisticTrainer`s minimizing binary cross-entropy, logits always clamped to
/// `±LOGIT_CLAMP`.
#[derive(Debug, Clone, Copy)]
pub struct TrainerBuilder {
    learning_rate: f64,
    decay: bool,
}

impl Default for TrainerBuilder {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            decay: false,
        }
    }
}

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base learning rate.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Enables or disables the per-epoch learning rate decay.
    pub fn decay(mut self, decay: bool) -> Self {
        self.decay = decay;
        self
    }

    /// Builds a trainer with the given update rule.
    ///
    /// # Returns
    /// An error if the learning rate isn't positive and finite.
    pub fn build<O: Optimizer>(self, optimizer: O) -> Result<LogisticTrainer<O, BinaryCrossEntropy>> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.) {
            return Err(MlErr::InvalidLearningRate(self.learning_rate));
        }

        let model = Logistic::default();
        let schedule = LrSchedule::new(self.learning_rate, self.decay);
        Ok(LogisticTrainer::new(
            model,
            optimizer,
            schedule,
            BinaryCrossEntropy,
        ))
    }

    /// Builds a full-batch gradient descent trainer.
    pub fn batch(self) -> Result<LogisticTrainer<GradientDescent, BinaryCrossEntropy>> {
        self.build(GradientDescent)
    }

    /// Builds a per-sample online ascent trainer.
    pub fn online(self) -> Result<LogisticTrainer<OnlineAscent, BinaryCrossEntropy>> {
        self.build(OnlineAscent)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        dataset::{Dataset, LabelEncoding, Sample},
        initialization::InitMode,
    };

    #[test]
    fn defaults() {
        let trainer = TrainerBuilder::new().batch().unwrap();

        assert_eq!(trainer.schedule(), LrSchedule::constant(DEFAULT_LEARNING_RATE));
        assert_eq!(trainer.epoch(), 0);
        assert!(trainer.params().is_empty());
    }

    #[test]
    fn configured_schedule() {
        let trainer = TrainerBuilder::new()
            .learning_rate(0.2)
            .decay(true)
            .online()
            .unwrap();

        assert_eq!(trainer.schedule().base(), 0.2);
        assert!(trainer.schedule().decays());
    }

    #[test]
    fn predictions_never_saturate() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut trainer = TrainerBuilder::new().batch().unwrap();
        trainer.initialize(1, InitMode::Zero, &mut rng).unwrap();

        let mut dataset = Dataset::new(1, LabelEncoding::Binary);
        dataset.push(Sample::new(vec![1e6], 1.)).unwrap();
        dataset.push(Sample::new(vec![-1e6], 0.)).unwrap();
        for _ in 0..50 {
            trainer.step(&dataset).unwrap();
        }

        for x in [800., -800., 1e300, -1e300, f64::MAX, f64::MIN] {
            let p = trainer.predict(&[x]).unwrap();
            assert!(p > 0. && p < 1., "p({x}) = {p}");
        }
        assert!(trainer.params().iter().all(|w| w.is_finite()));
        assert!(trainer.loss(&dataset).unwrap().is_finite());
    }

    #[test]
    fn rejects_bad_learning_rate() {
        for lr in [0., -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                TrainerBuilder::new().learning_rate(lr).batch(),
                Err(MlErr::InvalidLearningRate(_))
            ));
        }
    }
}
