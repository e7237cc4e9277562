use super::Optimizer;
use crate::{
    arch::{Logistic, loss::LossFn},
    dataset::Dataset,
    error::Result,
};

/// Full-batch gradient descent: the gradient is computed once over every sample, then a
/// single step is taken in its opposite direction.
#[derive(Debug, Default, Clone, Copy)]
pub struct GradientDescent;

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    pub fn new() -> Self {
        Self
    }
}

impl Optimizer for GradientDescent {
    /// The returned loss is the one measured before the step.
    fn epoch<L: LossFn>(
        &mut self,
        model: &Logistic,
        params: &mut [f64],
        dataset: &Dataset,
        loss_fn: &L,
        learning_rate: f64,
    ) -> Result<f64> {
        let (loss, grad) = model.loss_and_grad(params, dataset, loss_fn)?;

        for (w, g) in params.iter_mut().zip(&grad) {
            *w -= learning_rate * g;
        }

        Ok(loss)
    }
}
