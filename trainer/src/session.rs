use log::info;
use machine_learning::{
    arch::{Logistic, loss::BinaryCrossEntropy},
    dataset::Dataset,
    optimization::GradientDescent,
    training::{History, LogisticTrainer, TrainerBuilder},
};
use rand::{SeedableRng, rngs::StdRng};

use crate::{configs::TrainingConfig, error::Result};

type BatchTrainer = LogisticTrainer<GradientDescent, BinaryCrossEntropy>;

/// The outcome of a finished training session.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// Rows that were trained on.
    pub samples: usize,
    /// Features per row, the label excluded.
    pub features: usize,
    pub history: History,
    /// Accuracy over the training rows with the final weights.
    pub accuracy: Option<u32>,
}

impl TrainingReport {
    /// The history as `iter,loss,w0,...,wD` CSV.
    pub fn to_csv(&self) -> Result<String> {
        Ok(self.history.to_csv()?)
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.history.last().map(|record| record.loss())
    }

    pub fn final_weights(&self) -> Option<&[f64]> {
        self.history.last().map(|record| record.weights())
    }
}

/// A batch training run over CSV data, ready to be started.
pub struct Session {
    config: TrainingConfig,
    dataset: Dataset,
    trainer: BatchTrainer,
}

impl Session {
    /// Creates a new `Session`.
    ///
    /// # Arguments
    /// * `config` - The run's hyperparameters.
    /// * `csv` - The training rows, `feature_1,...,feature_k,label`. Malformed rows are
    ///   skipped.
    ///
    /// # Returns
    /// A session with initialized weights, or an error if the config is invalid or no
    /// row could be parsed.
    pub fn new(config: TrainingConfig, csv: &str) -> Result<Self> {
        config.validate()?;

        let dataset = Dataset::from_csv(csv)?;
        info!(
            "loaded {} sample(s) with {} feature(s), {} weights including the bias",
            dataset.len(),
            dataset.dim(),
            Logistic::size(dataset.dim())
        );

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut trainer = TrainerBuilder::new()
            .learning_rate(config.learning_rate)
            .batch()?;
        trainer.initialize(dataset.dim(), config.init.mode(), &mut rng)?;

        Ok(Self {
            config,
            dataset,
            trainer,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The weights training will start from.
    pub fn params(&self) -> &[f64] {
        self.trainer.params()
    }

    /// Trains for the configured iterations.
    pub fn run(mut self) -> Result<TrainingReport> {
        let iterations = self.config.iterations.get();
        info!(
            "training for {iterations} iteration(s) at learning rate {}",
            self.config.learning_rate
        );

        let history = self.trainer.fit(&self.dataset, iterations)?;
        let accuracy = self.trainer.evaluate_accuracy(&self.dataset)?;

        if let Some(acc) = accuracy {
            info!("final accuracy {acc}%");
        }

        Ok(TrainingReport {
            samples: self.dataset.len(),
            features: self.dataset.dim(),
            history,
            accuracy,
        })
    }
}
