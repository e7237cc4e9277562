/// How the labels of a dataset are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelEncoding {
    /// `+1` for the positive class, `-1` for the negative one.
    Signed,
    /// `1` for the positive class, `0` for the negative one.
    Binary,
}

impl LabelEncoding {
    /// Maps a label to the `{0, 1}` target the loss works with.
    pub fn target(&self, label: f64) -> f64 {
        match self {
            LabelEncoding::Signed => (label > 0.) as u8 as f64,
            LabelEncoding::Binary => label,
        }
    }

    /// The label this encoding writes for a predicted class.
    pub fn label(&self, positive: bool) -> f64 {
        match (self, positive) {
            (_, true) => 1.,
            (LabelEncoding::Signed, false) => -1.,
            (LabelEncoding::Binary, false) => 0.,
        }
    }

    /// Whether a predicted class agrees with a stored label.
    pub fn matches(&self, positive: bool, label: f64) -> bool {
        self.label(positive) == label
    }
}

/// A single supervised sample: a feature vector and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    features: Vec<f64>,
    label: f64,
}

impl Sample {
    pub fn new(features: Vec<f64>, label: f64) -> Self {
        Self { features, label }
    }

    #[inline]
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    #[inline]
    pub fn label(&self) -> f64 {
        self.label
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.features.len()
    }

    /// Whether every feature and the label are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.label.is_finite() && self.features.iter().all(|x| x.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_targets() {
        let enc = LabelEncoding::Signed;
        assert_eq!(enc.target(1.), 1.);
        assert_eq!(enc.target(-1.), 0.);
        assert!(enc.matches(false, -1.));
        assert!(!enc.matches(false, 0.));
    }

    #[test]
    fn binary_targets() {
        let enc = LabelEncoding::Binary;
        assert_eq!(enc.target(0.), 0.);
        assert_eq!(enc.target(1.), 1.);
        assert!(enc.matches(true, 1.));
        assert!(enc.matches(false, 0.));
        assert!(!enc.matches(true, 0.));
    }
}
