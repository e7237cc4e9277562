use crate::{
    arch::{Logistic, loss::LossFn},
    dataset::Dataset,
    error::Result,
};

/// Defines how a full pass over the dataset updates the model's parameters.
pub trait Optimizer {
    /// Runs one epoch of updates over `dataset`, mutating `params` in place.
    ///
    /// # Arguments
    /// * `model` - The model mapping parameters and features into probabilities.
    /// * `params` - The parameters to update, bias first.
    /// * `dataset` - The samples to learn from.
    /// * `loss_fn` - The loss function being minimized.
    /// * `learning_rate` - The length of the steps taken.
    ///
    /// # Returns
    /// The epoch loss, or an error if the dataset is empty or doesn't match the parameters'
    /// dimensionality. On error `params` is left untouched.
    fn epoch<L: LossFn>(
        &mut self,
        model: &Logistic,
        params: &mut [f64],
        dataset: &Dataset,
        loss_fn: &L,
        learning_rate: f64,
    ) -> Result<f64>;
}
