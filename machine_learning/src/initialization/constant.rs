use super::ParamGen;

/// Starts every parameter at 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroParamGen;

impl ParamGen for ZeroParamGen {
    fn generate(&mut self, size: usize) -> Vec<f64> {
        vec![0.; size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        assert_eq!(ZeroParamGen.generate(3), [0., 0., 0.]);
        assert!(ZeroParamGen.generate(0).is_empty());
    }
}
