// src/views/vehicle.rs
//
// One taxi: the occupant of a single grid cell in a digit container.
//
// A vehicle is either in place (Active), driving off to its parking spot
// while fading (Parking), or parked and hidden (Inactive).

use nannou::prelude::*;

use crate::animation::{MotionTiming, Tween};
use crate::models::{GridCell, Orientation};
use crate::services::TimerHandle;
use crate::views::layout::CellPositions;

/// Opacity a vehicle fades towards while it drives off.
pub const PARKING_OPACITY: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleState {
    Active,
    Parking,
    Inactive,
}

/// Which of the two layout positions a move is heading for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    InPlace,
    Park,
}

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub cell: GridCell,
    orientation: Orientation,
    state: VehicleState,
    positions: CellPositions,
    position: Vec2,
    opacity: f32,
    transition_delay: f32,
    motion: Option<Tween<Vec2>>,
    fade: Option<Tween<f32>>,
    hide_timer: Option<TimerHandle>,
}

impl Vehicle {
    /// A new vehicle starts parked and hidden.
    pub fn new(cell: GridCell, positions: CellPositions) -> Self {
        Self {
            cell,
            orientation: cell.orientation(),
            state: VehicleState::Inactive,
            positions,
            position: positions.park,
            opacity: 0.0,
            transition_delay: 0.0,
            motion: None,
            fade: None,
            hide_timer: None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn state(&self) -> VehicleState {
        self.state
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn positions(&self) -> &CellPositions {
        &self.positions
    }

    pub fn transition_delay(&self) -> f32 {
        self.transition_delay
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.state != VehicleState::Inactive && self.opacity > 0.0
    }

    /************************** Hide timer ********************************** */

    pub fn hide_timer(&self) -> Option<TimerHandle> {
        self.hide_timer
    }

    pub fn take_hide_timer(&mut self) -> Option<TimerHandle> {
        self.hide_timer.take()
    }

    pub fn set_hide_timer(&mut self, handle: TimerHandle) {
        self.hide_timer = Some(handle);
    }

    /************************** State changes ******************************* */

    /// Marks the vehicle as arriving. The drive itself starts with `drive_to`.
    pub fn enter(&mut self, now: f32, delay: f32, fade: MotionTiming) {
        self.transition_delay = delay;
        self.state = VehicleState::Active;
        self.fade = Some(Tween::new(self.opacity, 1.0, now, fade.duration, fade.easing));
    }

    /// Marks the vehicle as leaving. It stays visible until `hide`.
    pub fn park(&mut self, now: f32, delay: f32, fade: MotionTiming) {
        self.transition_delay = delay;
        self.state = VehicleState::Parking;
        self.fade = Some(Tween::new(
            self.opacity,
            PARKING_OPACITY,
            now,
            fade.duration,
            fade.easing,
        ));
    }

    /// Parking finished: the vehicle disappears at its parking spot.
    pub fn hide(&mut self) {
        self.state = VehicleState::Inactive;
        self.opacity = 0.0;
        self.fade = None;
        self.hide_timer = None;
    }

    /// Starts driving from wherever the vehicle is now, after its
    /// transition delay.
    pub fn drive_to(&mut self, slot: Slot, now: f32, timing: MotionTiming) {
        let target = self.slot_position(slot);
        self.motion = Some(Tween::new(
            self.position,
            target,
            now + self.transition_delay,
            timing.duration,
            timing.easing,
        ));
    }

    pub fn slot_position(&self, slot: Slot) -> Vec2 {
        match slot {
            Slot::InPlace => self.positions.in_place,
            Slot::Park => self.positions.park,
        }
    }

    /************************** Layout ************************************** */

    /// Takes new layout positions and jumps to the one matching the
    /// current state, without animating.
    pub fn relayout(&mut self, positions: CellPositions) {
        self.positions = positions;
        self.motion = None;
        self.position = match self.state {
            VehicleState::Active => positions.in_place,
            VehicleState::Parking | VehicleState::Inactive => positions.park,
        };
    }

    /************************** Per-frame *********************************** */

    pub fn advance(&mut self, now: f32) {
        if let Some(motion) = &self.motion {
            self.position = motion.value_at(now);
            if motion.is_complete(now) {
                self.motion = None;
            }
        }
        if let Some(fade) = &self.fade {
            self.opacity = fade.value_at(now);
            if fade.is_complete(now) {
                self.fade = None;
            }
        }
    }
}
