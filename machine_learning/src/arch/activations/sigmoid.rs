/// Logits are clamped to `[-LOGIT_CLAMP, LOGIT_CLAMP]` before exponentiating.
pub const LOGIT_CLAMP: f64 = 30.;

/// The logistic function, with its input clamped to `±LOGIT_CLAMP` so the output never
/// saturates to exactly 0 or 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sigmoid;

impl Sigmoid {
    pub fn f(&self, z: f64) -> f64 {
        let z = z.clamp(-LOGIT_CLAMP, LOGIT_CLAMP);
        1. / (1. + (-z).exp())
    }
}
