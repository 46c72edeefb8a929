pub mod clock_controller;
pub mod osc;

pub use clock_controller::{ClockAction, ClockController, RenderSummary};
pub use osc::{OscCommand, OscController};
