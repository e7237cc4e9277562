use std::num::NonZeroU32;

use log::debug;
use machine_learning::{
    arch::loss::BinaryCrossEntropy,
    dataset::{Dataset, LabelEncoding, Sample},
    initialization::{CANVAS_INIT_BOUND, InitMode},
    optimization::{LrSchedule, OnlineAscent},
    training::{EpochReport, LogisticTrainer, TrainerBuilder},
};
use rand::Rng;

use crate::{
    canvas::Canvas,
    config::TrainConfig,
    error::{ClassifierErr, Result},
    field::{ProbabilityField, decision_boundary},
    points::{Clusters, Label, Point},
    run::{Status, TrainingRun},
};

/// Features of every point: normalized `x` and `y`.
const DIM: usize = 2;

/// The trainer type driving the classifier: per-sample online ascent.
pub type OnlineTrainer = LogisticTrainer<OnlineAscent, BinaryCrossEntropy>;

/// An interactive 2D binary classifier.
///
/// Owns the placed points, their normalized dataset and the model being trained on
/// them. Everything a renderer needs is derived from this state on demand.
pub struct Classifier<R: Rng> {
    canvas: Canvas,
    points: Vec<Point>,
    dataset: Dataset,
    trainer: OnlineTrainer,
    rng: R,
}

impl<R: Rng> Classifier<R> {
    /// Creates a classifier with no points and small random weights.
    ///
    /// # Arguments
    /// * `canvas` - The area points are placed on.
    /// * `rng` - The random source for weights and clusters.
    pub fn new(canvas: Canvas, mut rng: R) -> Result<Self> {
        let mut trainer = TrainerBuilder::new().online()?;
        trainer.initialize(DIM, Self::init_mode(), &mut rng)?;

        Ok(Self {
            canvas,
            points: Vec::new(),
            dataset: Dataset::new(DIM, LabelEncoding::Signed),
            trainer,
            rng,
        })
    }

    fn init_mode() -> InitMode {
        InitMode::Random {
            bound: CANVAS_INIT_BOUND,
        }
    }

    /// Places a point at pixel coordinates `(x, y)`.
    ///
    /// # Returns
    /// An error, leaving the classifier untouched, if a coordinate isn't finite.
    pub fn add_point(&mut self, x: f64, y: f64, label: Label) -> Result<()> {
        let point = Point::new(x, y, label);
        let features = self.canvas.normalize(x, y).to_vec();

        self.dataset.push(Sample::new(features, label.value()))?;
        self.points.push(point);
        Ok(())
    }

    /// Places a point the way a click does: positive, or negative while shift is held.
    pub fn click(&mut self, x: f64, y: f64, shift: bool) -> Result<()> {
        let label = if shift {
            Label::Negative
        } else {
            Label::Positive
        };

        self.add_point(x, y, label)
    }

    /// Adds a batch of randomly generated points.
    ///
    /// # Returns
    /// The amount of points added.
    pub fn scatter(&mut self, clusters: &Clusters) -> Result<usize> {
        let points = clusters.generate(&self.canvas, &mut self.rng)?;

        for p in &points {
            self.add_point(p.x, p.y, p.label)?;
        }

        debug!("scattered {} point(s), {} total", points.len(), self.points.len());
        Ok(points.len())
    }

    /// Removes every point and draws new random weights.
    pub fn clear(&mut self) -> Result<()> {
        self.points.clear();
        self.dataset.clear();
        self.trainer
            .initialize(DIM, Self::init_mode(), &mut self.rng)?;

        Ok(())
    }

    /// Starts a training run over the current points, keeping the current weights and
    /// restarting the learning rate schedule.
    ///
    /// # Returns
    /// The run to be stepped, or `NoPoints` if there is nothing to train on.
    pub fn start(&mut self, config: &TrainConfig) -> Result<TrainingRun> {
        if self.points.is_empty() {
            return Err(ClassifierErr::NoPoints);
        }

        self.trainer
            .set_schedule(LrSchedule::new(config.learning_rate(), config.auto_lr()));
        self.trainer.rewind();

        Ok(TrainingRun::new(config.epochs()))
    }

    pub(crate) fn train_epoch(&mut self) -> Result<EpochReport> {
        Ok(self.trainer.step(&self.dataset)?)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn trainer(&self) -> &OnlineTrainer {
        &self.trainer
    }

    /// The current `[bias, wx, wy]` weights.
    pub fn params(&self) -> &[f64] {
        self.trainer.params()
    }

    /// The probability of the positive class at normalized coordinates.
    pub fn probability(&self, nx: f64, ny: f64) -> f64 {
        self.trainer.model().forward(self.trainer.params(), &[nx, ny])
    }

    /// The probability of the positive class at pixel coordinates.
    pub fn probability_at(&self, x: f64, y: f64) -> f64 {
        let [nx, ny] = self.canvas.normalize(x, y);
        self.probability(nx, ny)
    }

    /// The rounded percentage of correctly classified points, `None` without points.
    pub fn accuracy(&self) -> Option<u32> {
        self.trainer
            .evaluate_accuracy(&self.dataset)
            .ok()
            .flatten()
    }

    /// The status shown while no run is active.
    pub fn idle_status(&self, config: &TrainConfig) -> Status {
        Status {
            accuracy: self.accuracy(),
            epoch: 0,
            epochs: None,
            learning_rate: config.learning_rate(),
            stopped: false,
        }
    }

    /// The probability field over the whole canvas with `step`-pixel cells.
    pub fn field(&self, step: NonZeroU32) -> ProbabilityField {
        ProbabilityField::sample(&self.canvas, step, |nx, ny| self.probability(nx, ny))
    }

    /// The decision boundary in pixel coordinates, see [`decision_boundary`].
    pub fn boundary(&self, segments: usize) -> Vec<(f64, f64)> {
        decision_boundary(self.trainer.params(), &self.canvas, segments)
    }
}

#[cfg(test)]
mod tests {
    use machine_learning::MlErr;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn classifier() -> Classifier<StdRng> {
        Classifier::new(Canvas::default(), StdRng::seed_from_u64(9)).unwrap()
    }

    #[test]
    fn starts_with_small_weights() {
        let c = classifier();

        assert_eq!(c.params().len(), 3);
        assert!(c.params().iter().all(|w| w.abs() <= CANVAS_INIT_BOUND));
        assert_eq!(c.accuracy(), None);
    }

    #[test]
    fn click_labels() {
        let mut c = classifier();
        c.click(10., 10., false).unwrap();
        c.click(490., 370., true).unwrap();

        assert_eq!(c.points()[0].label, Label::Positive);
        assert_eq!(c.points()[1].label, Label::Negative);
        assert_eq!(c.dataset().samples()[1].label(), -1.);
        let features = c.dataset().samples()[0].features();
        assert!((features[0] + 0.96).abs() < 1e-12);
        assert!((features[1] - (1. - 20. / 380.)).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_finite_points() {
        let mut c = classifier();
        c.click(100., 100., false).unwrap();
        c.click(400., 300., true).unwrap();

        for (x, y) in [(f64::NAN, 0.), (250., f64::INFINITY), (f64::NEG_INFINITY, 10.)] {
            assert!(matches!(
                c.click(x, y, false),
                Err(ClassifierErr::Ml(MlErr::NonFiniteSample))
            ));
        }
        assert_eq!(c.points().len(), 2);
        assert_eq!(c.dataset().len(), 2);

        let mut run = c.start(&TrainConfig::default()).unwrap();
        while run.step(&mut c).unwrap().is_some() {}

        assert!(c.params().iter().all(|w| w.is_finite()), "{:?}", c.params());
        assert_eq!(c.accuracy(), Some(100));
    }

    #[test]
    fn clear_redraws_weights() {
        let mut c = classifier();
        c.scatter(&Clusters::default()).unwrap();
        let before = c.params().to_vec();

        c.clear().unwrap();

        assert!(c.points().is_empty());
        assert!(c.dataset().is_empty());
        assert_ne!(c.params(), before.as_slice());
        assert_eq!(c.trainer().epoch(), 0);
    }

    #[test]
    fn start_without_points() {
        let mut c = classifier();
        assert!(matches!(
            c.start(&TrainConfig::default()),
            Err(ClassifierErr::NoPoints)
        ));
    }

    #[test]
    fn probability_matches_trainer() {
        let c = classifier();
        let [nx, ny] = c.canvas().normalize(120., 33.);

        assert_eq!(
            c.probability_at(120., 33.),
            c.trainer().predict(&[nx, ny]).unwrap()
        );
    }

    #[test]
    fn idle_status() {
        let c = classifier();
        let status = c.idle_status(&TrainConfig::default());

        assert_eq!(status.accuracy_text(), "Accuracy: —");
        assert_eq!(status.epoch_text(), "Epoch: 0");
        assert_eq!(status.lr_text(), "LR: 0.0500");
    }
}
