/// Fills a fresh parameter vector, bias included.
pub trait ParamGen {
    /// Generates `size` parameters.
    fn generate(&mut self, size: usize) -> Vec<f64>;
}
