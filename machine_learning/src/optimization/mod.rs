mod gradient_descent;
mod online_ascent;
mod optimizer;
mod schedule;

pub use gradient_descent::GradientDescent;
pub use online_ascent::OnlineAscent;
pub use optimizer::Optimizer;
pub use schedule::{DECAY_RATE, LrSchedule, learning_rate_for_epoch};
