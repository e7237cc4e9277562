mod constant;
mod error;
mod mode;
mod param_gen;
mod random;

pub use constant::ZeroParamGen;
pub use error::{RandErr, Result};
pub use mode::{CANVAS_INIT_BOUND, CSV_INIT_BOUND, InitMode};
pub use param_gen::ParamGen;
pub use random::RandParamGen;
