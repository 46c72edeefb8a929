// src/controllers/clock_controller.rs
//
// The ClockController owns everything that changes while the clock runs:
// the last observed time, the four digit containers and the scheduler
// holding their pending moves and hide timers.
//
// It is driven from the outside with explicit timestamps (app time in
// seconds), so it runs the same way under nannou and under test.

use log::{debug, info};
use rayon::prelude::*;

use crate::{
    animation::MotionTiming,
    config::{AnimationConfig, VehicleConfig},
    models::{DigitPatterns, GridCell},
    services::{ClockReading, Scheduler},
    views::{ClockLayout, DigitContainer, DigitPosition, Slot, VehicleState},
};

/// Work deferred to a later frame or to a timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockAction {
    MoveTo {
        position: DigitPosition,
        cell: GridCell,
        slot: Slot,
    },
    Hide {
        position: DigitPosition,
        cell: GridCell,
    },
}

/// What a single render pass changed.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub position: DigitPosition,
    pub digit: char,
    pub entering: Vec<GridCell>,
    pub exiting: Vec<GridCell>,
}

impl RenderSummary {
    pub fn is_empty(&self) -> bool {
        self.entering.is_empty() && self.exiting.is_empty()
    }
}

pub struct ClockController {
    patterns: DigitPatterns,
    containers: Vec<DigitContainer>, // indexed by DigitPosition::index
    scheduler: Scheduler<ClockAction>,
    current_time: String,
    ampm_text: String,
    animation: AnimationConfig,
    vehicle_size: VehicleConfig,
}

impl ClockController {
    pub fn new(layout: &ClockLayout, animation: AnimationConfig, vehicle_size: VehicleConfig) -> Self {
        let containers = DigitPosition::ALL
            .iter()
            .map(|&position| {
                DigitContainer::new(position, layout.containers[position.index()], &vehicle_size)
            })
            .collect();

        Self {
            patterns: DigitPatterns::new(),
            containers,
            scheduler: Scheduler::new(),
            current_time: String::new(),
            ampm_text: String::new(),
            animation,
            vehicle_size,
        }
    }

    pub fn container(&self, position: DigitPosition) -> &DigitContainer {
        &self.containers[position.index()]
    }

    pub fn containers(&self) -> &[DigitContainer] {
        &self.containers
    }

    pub fn patterns(&self) -> &DigitPatterns {
        &self.patterns
    }

    pub fn current_time(&self) -> &str {
        &self.current_time
    }

    pub fn ampm_text(&self) -> &str {
        &self.ampm_text
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_timers()
    }

    /************************** Clock poller ***************************** */

    /// Compares a reading with the last one and re-renders only the
    /// positions whose digit changed. Returns those positions.
    pub fn tick(&mut self, reading: &ClockReading, now: f32) -> Vec<DigitPosition> {
        if reading.time == self.current_time {
            return Vec::new();
        }

        let previous: Vec<char> = self.current_time.chars().collect();
        let next: Vec<char> = reading.time.chars().collect();
        let changed: Vec<DigitPosition> = DigitPosition::ALL
            .iter()
            .copied()
            .filter(|p| previous.get(p.index()) != next.get(p.index()))
            .collect();

        info!("Time {} -> {}", self.current_time, reading.time);
        self.current_time = reading.time.clone();

        for &position in &changed {
            let digit = next.get(position.index()).copied().unwrap_or(' ');
            let summary = self.render(position, digit, now);
            debug!(
                "{} -> '{}': {} entering, {} exiting",
                position.key(),
                digit,
                summary.entering.len(),
                summary.exiting.len()
            );
        }

        if reading.ampm != self.ampm_text {
            self.ampm_text = reading.ampm.clone();
        }

        changed
    }

    /************************** Cell-state renderer ************************ */

    /// Sends vehicles into or out of their cells so the container shows
    /// `digit`. Characters other than '0'-'9' clear the container, and the
    /// digit already shown is a no-op.
    pub fn render(&mut self, position: DigitPosition, digit: char, now: f32) -> RenderSummary {
        let target = self.patterns.pattern_set(digit);
        let enter_step = self.animation.enter_step_ms / 1000.0;
        let exit_step = self.animation.exit_step_ms / 1000.0;
        let hide_after = self.animation.hide_after_ms / 1000.0;
        let fade = MotionTiming {
            duration: self.animation.fade_duration,
            easing: self.animation.easing,
        };

        let container = &mut self.containers[position.index()];
        // the same digit again changes nothing
        if container.digit == Some(digit) {
            return RenderSummary {
                position,
                digit,
                entering: Vec::new(),
                exiting: Vec::new(),
            };
        }
        container.digit = Some(digit);

        // Every target cell takes a place in the enter cascade, in row-major
        // order, even when its vehicle is already in place. Exits cover every
        // visible vehicle outside the pattern, including ones still parking.
        let mut entering = Vec::new();
        let mut exiting = Vec::new();
        let mut target_index = 0;
        for vehicle in container.vehicles() {
            if target.contains(&vehicle.cell) {
                if vehicle.state() != VehicleState::Active {
                    entering.push((target_index, vehicle.cell));
                }
                target_index += 1;
            } else if vehicle.state() != VehicleState::Inactive {
                exiting.push(vehicle.cell);
            }
        }

        for &(i, cell) in &entering {
            let Some(vehicle) = container.vehicle_mut(cell) else {
                continue;
            };
            if let Some(handle) = vehicle.take_hide_timer() {
                self.scheduler.cancel(handle);
            }
            vehicle.enter(now, i as f32 * enter_step, fade);
            self.scheduler.defer_to_next_frame(ClockAction::MoveTo {
                position,
                cell,
                slot: Slot::InPlace,
            });
        }

        for (i, &cell) in exiting.iter().enumerate() {
            let Some(vehicle) = container.vehicle_mut(cell) else {
                continue;
            };
            let delay = i as f32 * exit_step;
            if let Some(handle) = vehicle.take_hide_timer() {
                self.scheduler.cancel(handle);
            }
            vehicle.park(now, delay, fade);
            self.scheduler.defer_to_next_frame(ClockAction::MoveTo {
                position,
                cell,
                slot: Slot::Park,
            });
            let handle =
                self.scheduler
                    .schedule(now, delay + hide_after, ClockAction::Hide { position, cell });
            vehicle.set_hide_timer(handle);
        }

        RenderSummary {
            position,
            digit,
            entering: entering.into_iter().map(|(_, cell)| cell).collect(),
            exiting,
        }
    }

    /************************** Per-frame update ************************** */

    /// Applies moves queued by earlier frames, fires due hide timers and
    /// advances every vehicle tween.
    pub fn update(&mut self, now: f32) {
        let drive = MotionTiming {
            duration: self.animation.drive_duration,
            easing: self.animation.easing,
        };

        for action in self.scheduler.take_next_frame() {
            if let ClockAction::MoveTo {
                position,
                cell,
                slot,
            } = action
            {
                if let Some(vehicle) = self.containers[position.index()].vehicle_mut(cell) {
                    vehicle.drive_to(slot, now, drive);
                }
            }
        }

        for (handle, action) in self.scheduler.take_due(now) {
            if let ClockAction::Hide { position, cell } = action {
                if let Some(vehicle) = self.containers[position.index()].vehicle_mut(cell) {
                    if vehicle.hide_timer() == Some(handle) {
                        vehicle.hide();
                    }
                }
            }
        }

        for container in self.containers.iter_mut() {
            container.advance(now);
        }
    }

    /************************** Layout responder ************************** */

    /// Moves every vehicle to its spot in the new layout at once,
    /// keeping its state.
    pub fn on_resize(&mut self, layout: &ClockLayout) {
        let vehicle_size = self.vehicle_size;
        self.containers.par_iter_mut().for_each(|container| {
            let rect = layout.containers[container.position.index()];
            container.relayout(rect, &vehicle_size);
        });
        debug!(
            "Relayout for {}x{} window",
            layout.window_size.x, layout.window_size.y
        );
    }
}
