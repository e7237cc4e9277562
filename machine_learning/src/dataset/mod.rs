mod reader;
mod sample;

pub use sample::{LabelEncoding, Sample};

use crate::error::{MlErr, Result};

/// An in-memory, ordered set of labelled samples sharing the same dimensionality.
///
/// Insertion order is preserved, the online update rule visits samples in that order.
#[derive(Debug, Clone)]
pub struct Dataset {
    dim: usize,
    encoding: LabelEncoding,
    samples: Vec<Sample>,
}

impl Dataset {
    /// Creates a new empty dataset.
    ///
    /// # Arguments
    /// * `dim` - The amount of features every sample must have.
    /// * `encoding` - How labels are written in this dataset.
    pub fn new(dim: usize, encoding: LabelEncoding) -> Self {
        Self {
            dim,
            encoding,
            samples: Vec::new(),
        }
    }

    /// Appends a sample.
    ///
    /// # Returns
    /// An error if the sample's dimensionality differs from the dataset's, or if any of its
    /// values isn't finite.
    pub fn push(&mut self, sample: Sample) -> Result<()> {
        if sample.dim() != self.dim {
            return Err(MlErr::DimensionMismatch {
                got: sample.dim(),
                expected: self.dim,
            });
        }

        if !sample.is_finite() {
            return Err(MlErr::NonFiniteSample);
        }

        self.samples.push(sample);
        Ok(())
    }

    /// Removes every sample, keeping the dimensionality and encoding.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn encoding(&self) -> LabelEncoding {
        self.encoding
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
