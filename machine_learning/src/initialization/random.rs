use rand::{
    Rng,
    distr::{Distribution, Uniform},
};

use super::{ParamGen, RandErr, Result};

/// Draws every parameter independently from `distribution`.
pub struct RandParamGen<'r, R: Rng, D: Distribution<f64>> {
    rng: &'r mut R,
    distribution: D,
}

impl<'r, R: Rng, D: Distribution<f64>> RandParamGen<'r, R, D> {
    pub fn new(rng: &'r mut R, distribution: D) -> Self {
        Self { rng, distribution }
    }
}

impl<'r, R: Rng> RandParamGen<'r, R, Uniform<f64>> {
    /// Creates a generator sampling uniformly from `[-bound, bound)`.
    ///
    /// # Arguments
    /// * `rng` - The random source, borrowed for as long as the generator lives.
    /// * `bound` - Half the interval's width.
    ///
    /// # Returns
    /// An error if `bound` is not a positive finite number.
    pub fn symmetric(rng: &'r mut R, bound: f64) -> Result<Self> {
        if !(bound.is_finite() && bound > 0.) {
            return Err(RandErr::new(format!(
                "the init bound must be positive and finite, got {bound}"
            )));
        }

        Ok(Self::new(rng, Uniform::new(-bound, bound)?))
    }
}

impl<R: Rng, D: Distribution<f64>> ParamGen for RandParamGen<'_, R, D> {
    fn generate(&mut self, size: usize) -> Vec<f64> {
        (&self.distribution)
            .sample_iter(&mut *self.rng)
            .take(size)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn within_bound() {
        let mut rng = StdRng::seed_from_u64(42);

        let params = RandParamGen::symmetric(&mut rng, 0.1).unwrap().generate(64);

        assert_eq!(params.len(), 64);
        assert!(params.iter().all(|w| (-0.1..0.1).contains(w)));
    }

    #[test]
    fn seeded() {
        let a = RandParamGen::symmetric(&mut StdRng::seed_from_u64(5), 0.5)
            .unwrap()
            .generate(3);
        let b = RandParamGen::symmetric(&mut StdRng::seed_from_u64(5), 0.5)
            .unwrap()
            .generate(3);

        assert_eq!(a, b);
    }

    #[test]
    fn invalid_bound() {
        let mut rng = StdRng::seed_from_u64(42);

        assert!(RandParamGen::symmetric(&mut rng, 0.).is_err());
        assert!(RandParamGen::symmetric(&mut rng, -1.).is_err());
        assert!(RandParamGen::symmetric(&mut rng, f64::NAN).is_err());
    }
}
