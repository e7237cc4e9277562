use super::Optimizer;
use crate::{
    arch::{Logistic, check_dims, loss::LossFn},
    dataset::Dataset,
    error::{MlErr, Result},
};

/// Sequential, per-sample updates in insertion order.
///
/// Each sample is predicted with the parameters left by the previous one and
/// immediately applies `w += lr · (y - p) · x`, gradient ascent on that sample's
/// log-likelihood. With more than one sample this is not equivalent to a batch step.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlineAscent;

impl OnlineAscent {
    /// Returns a new `OnlineAscent`.
    pub fn new() -> Self {
        Self
    }
}

impl Optimizer for OnlineAscent {
    /// The returned loss is the mean of each sample's loss right before its own update.
    fn epoch<L: LossFn>(
        &mut self,
        model: &Logistic,
        params: &mut [f64],
        dataset: &Dataset,
        loss_fn: &L,
        learning_rate: f64,
    ) -> Result<f64> {
        check_dims(params, dataset)?;
        if dataset.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        let mut loss = 0.;

        for sample in dataset.samples() {
            let target = dataset.encoding().target(sample.label());
            let prob = model.forward(params, sample.features());
            loss += loss_fn.loss(prob, target);

            // `loss_prime` is `p - y`, descending it is ascending the log-likelihood.
            let delta = loss_fn.loss_prime(prob, target);
            params[0] -= learning_rate * delta;
            for (w, x) in params[1..].iter_mut().zip(sample.features()) {
                *w -= learning_rate * (delta * x);
            }
        }

        Ok(loss / dataset.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arch::loss::BinaryCrossEntropy,
        dataset::{LabelEncoding, Sample},
    };

    #[test]
    fn second_sample_sees_first_update() {
        let mut dataset = Dataset::new(1, LabelEncoding::Signed);
        dataset.push(Sample::new(vec![1.], 1.)).unwrap();
        dataset.push(Sample::new(vec![1.], 1.)).unwrap();

        let lr = 1.;
        let mut params = [0., 0.];
        OnlineAscent
            .epoch(
                &Logistic::default(),
                &mut params,
                &dataset,
                &BinaryCrossEntropy,
                lr,
            )
            .unwrap();

        // First sample: p = 0.5, both weights move by 0.5.
        // Second sample: p = σ(1), both weights move by 1 - σ(1).
        let second = 1. - 1. / (1. + (-1f64).exp());
        let expected = 0.5 + second;

        assert!((params[0] - expected).abs() < 1e-12);
        assert!((params[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn signed_labels_push_towards_their_class() {
        let mut dataset = Dataset::new(2, LabelEncoding::Signed);
        dataset.push(Sample::new(vec![0.5, 0.5], 1.)).unwrap();
        dataset.push(Sample::new(vec![-0.5, -0.5], -1.)).unwrap();

        let model = Logistic::default();
        let mut params = [0., 0., 0.];
        for _ in 0..50 {
            OnlineAscent
                .epoch(&model, &mut params, &dataset, &BinaryCrossEntropy, 0.5)
                .unwrap();
        }

        assert!(model.forward(&params, &[0.5, 0.5]) > 0.9);
        assert!(model.forward(&params, &[-0.5, -0.5]) < 0.1);
    }

    #[test]
    fn mismatch_leaves_params() {
        let mut dataset = Dataset::new(1, LabelEncoding::Signed);
        dataset.push(Sample::new(vec![1.], 1.)).unwrap();

        let mut params = [0.1, 0.2, 0.3];
        let res = OnlineAscent.epoch(
            &Logistic::default(),
            &mut params,
            &dataset,
            &BinaryCrossEntropy,
            0.1,
        );

        assert!(matches!(res, Err(MlErr::DimensionMismatch { .. })));
        assert_eq!(params, [0.1, 0.2, 0.3]);
    }
}
