use std::fmt;

use rand::Rng;

use crate::{classifier::Classifier, error::Result};

/// What one epoch of a training run did, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    /// Epochs completed in this run, this one included.
    pub epoch: usize,
    /// Epochs the run was started with.
    pub epochs: usize,
    pub learning_rate: f64,
    pub loss: f64,
    /// Accuracy over every point after the epoch.
    pub accuracy: Option<u32>,
}

impl EpochReport {
    pub fn status(&self) -> Status {
        Status {
            accuracy: self.accuracy,
            epoch: self.epoch,
            epochs: Some(self.epochs),
            learning_rate: self.learning_rate,
            stopped: false,
        }
    }
}

/// The status line of the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Status {
    pub accuracy: Option<u32>,
    pub epoch: usize,
    /// `None` while no run is active.
    pub epochs: Option<usize>,
    pub learning_rate: f64,
    pub stopped: bool,
}

impl Status {
    pub fn accuracy_text(&self) -> String {
        match self.accuracy {
            Some(acc) => format!("Accuracy: {acc}%"),
            None => "Accuracy: —".to_string(),
        }
    }

    pub fn epoch_text(&self) -> String {
        let mut text = match self.epochs {
            Some(epochs) => format!("Epoch: {}/{epochs}", self.epoch),
            None => format!("Epoch: {}", self.epoch),
        };

        if self.stopped {
            text.push_str(" (stopped)");
        }

        text
    }

    pub fn lr_text(&self) -> String {
        format!("LR: {:.4}", self.learning_rate)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.accuracy_text(),
            self.epoch_text(),
            self.lr_text()
        )
    }
}

/// A bounded run of online epochs over a classifier's points.
///
/// Created by `Classifier::start`. It only counts epochs, the weights live in the
/// classifier, so a run can be dropped or stopped between any two steps.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRun {
    epochs: usize,
    completed: usize,
    stopped: bool,
    last: Option<EpochReport>,
}

impl TrainingRun {
    pub(crate) fn new(epochs: usize) -> Self {
        Self {
            epochs,
            completed: 0,
            stopped: false,
            last: None,
        }
    }

    /// Runs the next epoch.
    ///
    /// # Returns
    /// The epoch's report, or `None` once every epoch ran or the run was stopped.
    pub fn step<R: Rng>(&mut self, classifier: &mut Classifier<R>) -> Result<Option<EpochReport>> {
        if self.is_finished() {
            return Ok(None);
        }

        let epoch = classifier.train_epoch()?;
        self.completed += 1;

        let report = EpochReport {
            epoch: self.completed,
            epochs: self.epochs,
            learning_rate: epoch.learning_rate,
            loss: epoch.loss,
            accuracy: classifier.accuracy(),
        };

        self.last = Some(report);
        Ok(Some(report))
    }

    pub fn is_finished(&self) -> bool {
        self.stopped || self.completed >= self.epochs
    }

    /// Stops the run, no more epochs will be stepped.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// The status after the last stepped epoch.
    pub fn status<R: Rng>(&self, classifier: &Classifier<R>) -> Status {
        let learning_rate = self
            .last
            .map(|report| report.learning_rate)
            .unwrap_or_else(|| classifier.trainer().learning_rate());

        Status {
            accuracy: classifier.accuracy(),
            epoch: self.completed,
            epochs: Some(self.epochs),
            learning_rate,
            stopped: self.stopped,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{canvas::Canvas, config::TrainConfig, points::Clusters};

    fn classifier() -> Classifier<StdRng> {
        let mut c = Classifier::new(Canvas::default(), StdRng::seed_from_u64(21)).unwrap();
        c.scatter(&Clusters::default()).unwrap();
        c
    }

    #[test]
    fn runs_every_epoch() {
        let mut c = classifier();
        let config = TrainConfig::from_inputs("0.05", "5", false);
        let mut run = c.start(&config).unwrap();

        let mut epochs = Vec::new();
        while let Some(report) = run.step(&mut c).unwrap() {
            assert_eq!(report.learning_rate, 0.05);
            assert!(report.accuracy.is_some());
            epochs.push(report.epoch);
        }

        assert_eq!(epochs, [1, 2, 3, 4, 5]);
        assert!(run.is_finished());
        assert_eq!(run.step(&mut c).unwrap(), None);
        assert_eq!(c.trainer().epoch(), 5);
    }

    #[test]
    fn decays_and_restarts_schedule() {
        let mut c = classifier();
        let config = TrainConfig::from_inputs("0.05", "11", true);

        let mut run = c.start(&config).unwrap();
        let mut last = None;
        while let Some(report) = run.step(&mut c).unwrap() {
            last = Some(report);
        }
        let last = last.unwrap();
        assert!((last.learning_rate - 0.05 / 1.5).abs() < 1e-12);
        assert_eq!(run.status(&c).lr_text(), "LR: 0.0333");

        let weights = c.params().to_vec();
        let mut run = c.start(&config).unwrap();
        assert_eq!(c.params(), weights.as_slice());

        let first = run.step(&mut c).unwrap().unwrap();
        assert_eq!(first.learning_rate, 0.05);
    }

    #[test]
    fn stop_halts_the_run() {
        let mut c = classifier();
        let mut run = c.start(&TrainConfig::default()).unwrap();

        run.step(&mut c).unwrap();
        run.step(&mut c).unwrap();
        run.stop();
        let weights = c.params().to_vec();

        assert_eq!(run.step(&mut c).unwrap(), None);
        assert_eq!(c.params(), weights.as_slice());

        let status = run.status(&c);
        assert_eq!(status.epoch_text(), "Epoch: 2/20 (stopped)");
    }

    #[test]
    fn status_texts() {
        let status = Status {
            accuracy: Some(85),
            epoch: 3,
            epochs: Some(20),
            learning_rate: 0.047619,
            stopped: false,
        };

        assert_eq!(
            status.to_string(),
            "Accuracy: 85% | Epoch: 3/20 | LR: 0.0476"
        );
    }
}
