/// A per-sample loss over a predicted probability and a `{0, 1}` target.
pub trait LossFn {
    /// The loss of predicting `prob` when the expected value is `target`.
    fn loss(&self, prob: f64, target: f64) -> f64;

    /// The derivative of the loss with respect to the logit that produced `prob`.
    fn loss_prime(&self, prob: f64, target: f64) -> f64;
}
