use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::{
    canvas::Canvas,
    error::{ClassifierErr, Result},
};

/// The class of a placed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// The label as stored in a signed dataset.
    pub fn value(&self) -> f64 {
        match self {
            Label::Positive => 1.,
            Label::Negative => -1.,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Label::Positive => Label::Negative,
            Label::Negative => Label::Positive,
        }
    }
}

/// A labelled point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub label: Label,
}

impl Point {
    pub fn new(x: f64, y: f64, label: Label) -> Self {
        Self { x, y, label }
    }
}

/// A cluster center the random points scatter around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Center {
    pub x: f64,
    pub y: f64,
    pub label: Label,
}

/// Parameters of the randomly generated, overlapping gaussian clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct Clusters {
    /// Each point picks one of these uniformly.
    pub centers: Vec<Center>,
    /// The amount of points to generate.
    pub count: usize,
    /// Standard deviation of the offsets from the center, per axis, in pixels.
    pub spread: f64,
    /// Probability of a point getting the opposite label of its center.
    pub flip_prob: f64,
    /// Minimum distance from a generated point to the canvas' border.
    pub margin: f64,
}

impl Default for Clusters {
    fn default() -> Self {
        Self {
            centers: vec![
                Center {
                    x: 150.,
                    y: 140.,
                    label: Label::Positive,
                },
                Center {
                    x: 350.,
                    y: 240.,
                    label: Label::Negative,
                },
            ],
            count: 70,
            spread: 48.,
            flip_prob: 0.1,
            margin: 6.,
        }
    }
}

impl Clusters {
    /// Samples `count` points around the centers, kept inside `canvas`.
    ///
    /// # Returns
    /// An error if `spread` isn't a valid standard deviation.
    pub fn generate<R: Rng>(&self, canvas: &Canvas, rng: &mut R) -> Result<Vec<Point>> {
        if self.centers.is_empty() {
            return Ok(Vec::new());
        }

        let offset =
            Normal::new(0., self.spread).map_err(|e| ClassifierErr::InvalidClusters(e.to_string()))?;

        let max_x = canvas.width() as f64 - self.margin;
        let max_y = canvas.height() as f64 - self.margin;

        let points = (0..self.count)
            .map(|_| {
                let center = self.centers[rng.random_range(0..self.centers.len())];
                let x = center.x + offset.sample(rng);
                let y = center.y + offset.sample(rng);

                let mut label = center.label;
                if rng.random::<f64>() < self.flip_prob {
                    label = label.flipped();
                }

                let x = x.min(max_x).max(self.margin);
                let y = y.min(max_y).max(self.margin);
                Point::new(x, y, label)
            })
            .collect();

        Ok(points)
    }
}
