// src/views/mod.rs

pub mod digit_container;
pub mod layout;
pub mod theme;
pub mod vehicle;

pub use digit_container::{DigitContainer, DigitPosition};
pub use layout::{positions_for_cell, to_screen, CellPositions, ClockLayout, ContainerRect};
pub use theme::{FlairControls, FlairMode};
pub use vehicle::{Slot, Vehicle, VehicleState};
