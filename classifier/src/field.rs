use std::num::NonZeroU32;

use machine_learning::arch::DECISION_THRESHOLD;

use crate::canvas::Canvas;

/// Strongest opacity of the positive shading, reached at probability 1.
pub const POSITIVE_MAX_ALPHA: f64 = 0.20;

/// Strongest opacity of the negative shading, reached at probability 0.
pub const NEGATIVE_MAX_ALPHA: f64 = 0.12;

/// Below this magnitude the `y` weight is treated as zero when tracing the boundary.
pub const FLAT_WEIGHT_EPS: f64 = 1e-8;

/// The tint of a field cell and its opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shade {
    Positive { alpha: f64 },
    Negative { alpha: f64 },
}

impl Shade {
    /// Shades a probability, more opaque the more confident it is.
    pub fn of(prob: f64) -> Self {
        if prob >= DECISION_THRESHOLD {
            let alpha = (prob - 0.5) / 0.5 * POSITIVE_MAX_ALPHA;
            Shade::Positive { alpha }
        } else {
            let alpha = (0.5 - prob) / 0.5 * NEGATIVE_MAX_ALPHA;
            Shade::Negative { alpha }
        }
    }
}

/// A square of the probability field, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub prob: f64,
    pub shade: Shade,
}

/// The model's probability sampled on a grid of cells covering the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityField {
    cells: Vec<Cell>,
}

impl ProbabilityField {
    /// Samples `prob` at the center of each `step`-sized cell, column by column.
    ///
    /// # Arguments
    /// * `canvas` - The area to cover.
    /// * `step` - The cells' side, in pixels.
    /// * `prob` - Maps normalized `(nx, ny)` coordinates into a probability.
    pub fn sample<F>(canvas: &Canvas, step: NonZeroU32, prob: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let size = step.get();
        let half = size as f64 / 2.;

        let cells = (0..canvas.width())
            .step_by(size as usize)
            .flat_map(|x| {
                (0..canvas.height())
                    .step_by(size as usize)
                    .map(move |y| (x, y))
            })
            .map(|(x, y)| {
                let nx = canvas.normalize_x(x as f64 + half);
                let ny = canvas.normalize_y(y as f64 + half);
                let p = prob(nx, ny);

                Cell {
                    x,
                    y,
                    size,
                    prob: p,
                    shade: Shade::of(p),
                }
            })
            .collect();

        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Traces the line where the logit `b + wx·nx + wy·ny` is zero across the canvas.
///
/// # Arguments
/// * `params` - The `[b, wx, wy]` parameters of a 2D logistic model.
/// * `canvas` - The canvas the points are returned in.
/// * `segments` - The amount of segments, `segments + 1` points are returned.
///
/// # Returns
/// The boundary in pixel coordinates, from left to right. Empty if `params` doesn't
/// describe a 2D model. A flat `wy` draws the horizontal center line.
pub fn decision_boundary(params: &[f64], canvas: &Canvas, segments: usize) -> Vec<(f64, f64)> {
    let &[b, wx, wy] = params else {
        return Vec::new();
    };

    let segments = segments.max(1);

    (0..=segments)
        .map(|i| {
            let nx = -1. + (2 * i) as f64 / segments as f64;
            let ny = if wy.abs() < FLAT_WEIGHT_EPS {
                0.
            } else {
                -(b + wx * nx) / wy
            };

            (canvas.denormalize_x(nx), canvas.denormalize_y(ny))
        })
        .collect()
}
