pub mod scheduler;
pub mod time_source;

pub use scheduler::{Scheduler, TimerHandle};
pub use time_source::{ClockReading, FixedTime, SystemTime, TimeSource};
