use log::{debug, info};
use rand::Rng;

use super::{History, HistoryRecord};
use crate::{
    arch::{Logistic, loss::LossFn},
    dataset::Dataset,
    error::{MlErr, Result},
    initialization::InitMode,
    optimization::{LrSchedule, Optimizer},
};

/// What a single training epoch did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    /// The amount of epochs completed so far, this one included.
    pub epoch: usize,
    /// The learning rate used during this epoch.
    pub learning_rate: f64,
    /// The loss reported by the optimizer for this epoch.
    pub loss: f64,
}

/// A logistic regression trainer.
///
/// Owns the parameter vector and the epoch counter of a single run, the rest of its
/// components define how each epoch updates those parameters. It keeps no other state
/// between calls, so training can be stopped and resumed at any epoch boundary.
#[derive(Debug, Clone)]
pub struct LogisticTrainer<O, L>
where
    O: Optimizer,
    L: LossFn,
{
    model: Logistic,
    params: Vec<f64>,
    epoch: usize,
    schedule: LrSchedule,
    optimizer: O,
    loss_fn: L,
}

impl<O, L> LogisticTrainer<O, L>
where
    O: Optimizer,
    L: LossFn,
{
    /// Returns a new `LogisticTrainer`, with no parameters until `initialize` is called.
    ///
    /// # Arguments
    /// * `model` - The model mapping parameters and features into probabilities.
    /// * `optimizer` - The update rule applied on each epoch.
    /// * `schedule` - The learning rate for each epoch.
    /// * `loss_fn` - The loss function being minimized.
    pub fn new(model: Logistic, optimizer: O, schedule: LrSchedule, loss_fn: L) -> Self {
        Self {
            model,
            params: Vec::new(),
            epoch: 0,
            schedule,
            optimizer,
            loss_fn,
        }
    }

    /// (Re)initializes the parameters for samples of `dim` features and resets the epoch
    /// counter.
    ///
    /// # Arguments
    /// * `dim` - The amount of features, the bias is added on top.
    /// * `mode` - How to fill the new parameters.
    /// * `rng` - The random source for `InitMode::Random`.
    pub fn initialize<R: Rng>(&mut self, dim: usize, mode: InitMode, rng: &mut R) -> Result<()> {
        self.params = mode.params(Logistic::size(dim), rng)?;
        self.epoch = 0;

        debug!("initialized {} parameters with {mode:?}", self.params.len());
        Ok(())
    }

    /// Restarts the learning rate schedule without touching the parameters.
    pub fn rewind(&mut self) {
        self.epoch = 0;
    }

    pub fn model(&self) -> &Logistic {
        &self.model
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn schedule(&self) -> LrSchedule {
        self.schedule
    }

    pub fn set_schedule(&mut self, schedule: LrSchedule) {
        self.schedule = schedule;
    }

    /// The learning rate the next epoch will use.
    pub fn learning_rate(&self) -> f64 {
        self.schedule.at(self.epoch)
    }

    /// The amount of features the parameters were initialized for, if they were.
    pub fn dim(&self) -> Option<usize> {
        self.params.len().checked_sub(1)
    }

    /// The probability of the positive class for `features`.
    ///
    /// # Returns
    /// An error if `features` doesn't match the parameters' dimensionality.
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        if self.params.len() != Logistic::size(features.len()) {
            return Err(MlErr::DimensionMismatch {
                got: features.len(),
                expected: self.params.len().saturating_sub(1),
            });
        }

        Ok(self.model.forward(&self.params, features))
    }

    /// Whether `features` fall on the positive side of the decision boundary.
    pub fn classify(&self, features: &[f64]) -> Result<bool> {
        self.predict(features).map(Logistic::is_positive)
    }

    /// The mean loss and its gradient over `dataset` at the current parameters.
    pub fn loss_and_grad(&self, dataset: &Dataset) -> Result<(f64, Vec<f64>)> {
        self.model
            .loss_and_grad(&self.params, dataset, &self.loss_fn)
    }

    /// The mean loss over `dataset` at the current parameters.
    pub fn loss(&self, dataset: &Dataset) -> Result<f64> {
        self.loss_and_grad(dataset).map(|(loss, _)| loss)
    }

    /// The rounded percentage of correctly classified samples, `None` if there are none.
    pub fn evaluate_accuracy(&self, dataset: &Dataset) -> Result<Option<u32>> {
        self.model.accuracy(&self.params, dataset)
    }

    /// Runs a single epoch with the scheduled learning rate and advances the epoch counter.
    ///
    /// # Returns
    /// The epoch's report, or an error if the dataset is empty, doesn't match the
    /// parameters or the learning rate is invalid. The trainer is untouched on error.
    pub fn step(&mut self, dataset: &Dataset) -> Result<EpochReport> {
        let learning_rate = self.learning_rate();
        if !(learning_rate.is_finite() && learning_rate > 0.) {
            return Err(MlErr::InvalidLearningRate(learning_rate));
        }

        let loss = self.optimizer.epoch(
            &self.model,
            &mut self.params,
            dataset,
            &self.loss_fn,
            learning_rate,
        )?;

        self.epoch += 1;
        let epoch = self.epoch;
        debug!(epoch = epoch, learning_rate = learning_rate, loss = loss; "epoch finished");

        Ok(EpochReport {
            epoch,
            learning_rate,
            loss,
        })
    }

    /// Runs `iterations` epochs, recording the loss and parameters before each of them plus
    /// a final record after the last one.
    ///
    /// Iteration indices continue from the current epoch counter.
    ///
    /// # Returns
    /// The recorded history, or the first error any epoch produced.
    pub fn fit(&mut self, dataset: &Dataset, iterations: usize) -> Result<History> {
        let mut history = History::with_capacity(iterations + 1);

        for _ in 0..iterations {
            let record = self.snapshot(dataset)?;
            self.step(dataset)?;
            history.push(record)?;
        }

        history.push(self.snapshot(dataset)?)?;

        if let Some(last) = history.last() {
            info!(
                "trained {iterations} iteration(s) on {} sample(s), final loss {:.6}",
                dataset.len(),
                last.loss()
            );
        }

        Ok(history)
    }

    fn snapshot(&self, dataset: &Dataset) -> Result<HistoryRecord> {
        let loss = self.loss(dataset)?;
        Ok(HistoryRecord::new(self.epoch, loss, self.params.clone()))
    }
}
