use super::{
    activations::Sigmoid,
    loss::LossFn,
};
use crate::{
    dataset::Dataset,
    error::{MlErr, Result},
};

/// Probabilities at or above this value are classified as the positive class.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// A linear model followed by a sigmoid: `p = σ(w0 + Σ wj+1 · xj)`.
///
/// The model holds no parameters itself, it's a view of how a parameter vector of
/// `features + 1` values (bias first) maps features into probabilities.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logistic {
    sigmoid: Sigmoid,
}

impl Logistic {
    /// The amount of parameters needed for `features` inputs.
    pub fn size(features: usize) -> usize {
        features + 1
    }

    /// Computes the logit `w0 + Σ wj+1 · xj`.
    ///
    /// The caller must guarantee `params.len() == features.len() + 1`.
    pub fn logit(params: &[f64], features: &[f64]) -> f64 {
        let (bias, weights) = params.split_first().unwrap_or((&0., &[]));

        weights
            .iter()
            .zip(features)
            .fold(*bias, |z, (w, x)| z + w * x)
    }

    /// The probability of the positive class for `features`.
    pub fn forward(&self, params: &[f64], features: &[f64]) -> f64 {
        self.sigmoid.f(Self::logit(params, features))
    }

    /// Whether a probability falls on the positive side of the decision boundary.
    pub fn is_positive(prob: f64) -> bool {
        prob >= DECISION_THRESHOLD
    }

    /// Computes the mean loss and its gradient with respect to `params` over the entire
    /// dataset.
    ///
    /// # Arguments
    /// * `params` - The model's parameters, bias first.
    /// * `dataset` - The labelled samples.
    /// * `loss_fn` - The loss function.
    ///
    /// # Returns
    /// A tuple with the mean loss and the gradient, or an error if the dataset is empty or
    /// doesn't match the parameters' dimensionality.
    pub fn loss_and_grad<L: LossFn>(
        &self,
        params: &[f64],
        dataset: &Dataset,
        loss_fn: &L,
    ) -> Result<(f64, Vec<f64>)> {
        check_dims(params, dataset)?;
        if dataset.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        let mut loss = 0.;
        let mut grad = vec![0.; params.len()];

        for sample in dataset.samples() {
            let target = dataset.encoding().target(sample.label());
            let prob = self.forward(params, sample.features());

            loss += loss_fn.loss(prob, target);

            let delta = loss_fn.loss_prime(prob, target);
            grad[0] += delta;
            for (g, x) in grad[1..].iter_mut().zip(sample.features()) {
                *g += delta * x;
            }
        }

        let n = dataset.len() as f64;
        for g in grad.iter_mut() {
            *g /= n;
        }

        Ok((loss / n, grad))
    }

    /// The percentage of samples whose predicted class matches their label, rounded to the
    /// nearest integer.
    ///
    /// # Returns
    /// `None` if the dataset is empty, or an error on a dimensionality mismatch.
    pub fn accuracy(&self, params: &[f64], dataset: &Dataset) -> Result<Option<u32>> {
        check_dims(params, dataset)?;
        if dataset.is_empty() {
            return Ok(None);
        }

        let correct = dataset
            .samples()
            .iter()
            .filter(|sample| {
                let positive = Self::is_positive(self.forward(params, sample.features()));
                dataset.encoding().matches(positive, sample.label())
            })
            .count();

        let pct = (100. * correct as f64 / dataset.len() as f64).round();
        Ok(Some(pct as u32))
    }
}

/// Fails if the dataset's samples can't be fed to a model with `params`.
pub(crate) fn check_dims(params: &[f64], dataset: &Dataset) -> Result<()> {
    if params.len() != Logistic::size(dataset.dim()) {
        return Err(MlErr::DimensionMismatch {
            got: dataset.dim(),
            expected: params.len().saturating_sub(1),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arch::loss::BinaryCrossEntropy,
        dataset::{LabelEncoding, Sample},
    };

    fn dataset(rows: &[(&[f64], f64)]) -> Dataset {
        let mut dataset = Dataset::new(rows[0].0.len(), LabelEncoding::Binary);
        for (x, y) in rows {
            dataset.push(Sample::new(x.to_vec(), *y)).unwrap();
        }
        dataset
    }

    #[test]
    fn logit_includes_bias() {
        assert_eq!(Logistic::logit(&[0.5, 2., -1.], &[3., 4.]), 0.5 + 6. - 4.);
        assert_eq!(Logistic::logit(&[-1.], &[]), -1.);
    }

    #[test]
    fn zero_params_are_undecided() {
        let model = Logistic::default();
        assert_eq!(model.forward(&[0., 0., 0.], &[10., -3.]), 0.5);
        assert!(Logistic::is_positive(0.5));
        assert!(!Logistic::is_positive(0.4999));
    }

    #[test]
    fn gradient_at_zero() {
        let model = Logistic::default();
        let data = dataset(&[(&[2.], 1.), (&[-2.], 0.)]);

        let (loss, grad) = model
            .loss_and_grad(&[0., 0.], &data, &BinaryCrossEntropy)
            .unwrap();

        // Both samples predict 0.5: deltas are -0.5 and 0.5.
        assert!((loss - 2f64.ln()).abs() < 1e-9);
        assert_eq!(grad, [0., -1.]);
    }

    #[test]
    fn gradient_matches_finite_differences() {
        let model = Logistic::default();
        let data = dataset(&[(&[1., 2.], 1.), (&[-0.5, 0.3], 0.), (&[0.2, -1.], 1.)]);
        let params = [0.1, -0.3, 0.7];

        let (_, grad) = model
            .loss_and_grad(&params, &data, &BinaryCrossEntropy)
            .unwrap();

        let h = 1e-6;
        for j in 0..params.len() {
            let mut hi = params;
            let mut lo = params;
            hi[j] += h;
            lo[j] -= h;

            let (l_hi, _) = model.loss_and_grad(&hi, &data, &BinaryCrossEntropy).unwrap();
            let (l_lo, _) = model.loss_and_grad(&lo, &data, &BinaryCrossEntropy).unwrap();
            let numeric = (l_hi - l_lo) / (2. * h);

            assert!((numeric - grad[j]).abs() < 1e-6, "{numeric} vs {}", grad[j]);
        }
    }

    #[test]
    fn empty_dataset() {
        let model = Logistic::default();
        let data = Dataset::new(2, LabelEncoding::Binary);

        assert!(matches!(
            model.loss_and_grad(&[0., 0., 0.], &data, &BinaryCrossEntropy),
            Err(MlErr::EmptyDataset)
        ));
        assert_eq!(model.accuracy(&[0., 0., 0.], &data).unwrap(), None);
    }

    #[test]
    fn dimension_mismatch() {
        let model = Logistic::default();
        let data = dataset(&[(&[1.], 1.)]);

        assert!(matches!(
            model.accuracy(&[0., 0., 0.], &data),
            Err(MlErr::DimensionMismatch {
                got: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn signed_accuracy() {
        let model = Logistic::default();
        let mut data = Dataset::new(1, LabelEncoding::Signed);
        data.push(Sample::new(vec![1.], 1.)).unwrap();
        data.push(Sample::new(vec![-1.], -1.)).unwrap();
        data.push(Sample::new(vec![2.], -1.)).unwrap();

        // Predicts positive for x > 0: two out of three.
        assert_eq!(model.accuracy(&[0., 1.], &data).unwrap(), Some(67));
    }
}
