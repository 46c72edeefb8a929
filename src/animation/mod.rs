pub mod easing;
pub mod vehicle_motion;

pub use easing::EasingType;
pub use vehicle_motion::{Lerp, MotionTiming, Tween};
