use rand::Rng;

use super::{ParamGen, RandParamGen, Result, ZeroParamGen};

/// Half-width of the interval the classifier demo draws its initial weights from.
pub const CANVAS_INIT_BOUND: f64 = 0.1;

/// Half-width of the interval the CSV trainer draws its initial weights from.
pub const CSV_INIT_BOUND: f64 = 0.5;

/// How a fresh weight vector is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitMode {
    /// Every weight starts at 0.
    Zero,
    /// Every weight is drawn uniformly from `[-bound, bound)`.
    Random { bound: f64 },
}

impl InitMode {
    /// Generates `size` parameters following this mode.
    ///
    /// # Arguments
    /// * `size` - The amount of parameters, bias included.
    /// * `rng` - The random source, only used by `Random`.
    ///
    /// # Returns
    /// An error if the random interval is invalid.
    pub fn params<R: Rng>(&self, size: usize, rng: &mut R) -> Result<Vec<f64>> {
        let params = match *self {
            InitMode::Zero => ZeroParamGen.generate(size),
            InitMode::Random { bound } => RandParamGen::symmetric(rng, bound)?.generate(size),
        };

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn zero() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = InitMode::Zero.params(3, &mut rng).unwrap();
        assert_eq!(params, [0., 0., 0.]);
    }

    #[test]
    fn random() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = InitMode::Random { bound: CSV_INIT_BOUND }
            .params(4, &mut rng)
            .unwrap();

        assert_eq!(params.len(), 4);
        assert!(params.iter().all(|w| (-0.5..0.5).contains(w)));
        assert!(params.iter().any(|w| *w != 0.));
    }

    #[test]
    fn invalid_bound() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(InitMode::Random { bound: 0. }.params(3, &mut rng).is_err());
    }

    #[test]
    fn zero_sized() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = InitMode::Zero.params(0, &mut rng).unwrap();
        assert!(params.is_empty());
    }
}
