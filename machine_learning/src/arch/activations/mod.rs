mod sigmoid;

pub use sigmoid::{LOGIT_CLAMP, Sigmoid};
