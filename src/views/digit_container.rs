// src/views/digit_container.rs
//
// A digit container owns the 45 vehicles of one clock position.

use crate::config::VehicleConfig;
use crate::models::{GridCell, CELLS_PER_DIGIT};
use crate::views::layout::{positions_for_cell, ContainerRect};
use crate::views::vehicle::{Vehicle, VehicleState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitPosition {
    HourTens,
    HourOnes,
    MinuteTens,
    MinuteOnes,
}

impl DigitPosition {
    pub const ALL: [DigitPosition; 4] = [
        DigitPosition::HourTens,
        DigitPosition::HourOnes,
        DigitPosition::MinuteTens,
        DigitPosition::MinuteOnes,
    ];

    /// Index of the character in the "HHMM" time string.
    pub fn index(&self) -> usize {
        match self {
            DigitPosition::HourTens => 0,
            DigitPosition::HourOnes => 1,
            DigitPosition::MinuteTens => 2,
            DigitPosition::MinuteOnes => 3,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DigitPosition::HourTens => "hour-tens",
            DigitPosition::HourOnes => "hour-ones",
            DigitPosition::MinuteTens => "min-tens",
            DigitPosition::MinuteOnes => "min-ones",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DigitContainer {
    pub position: DigitPosition,
    pub rect: ContainerRect,
    pub digit: Option<char>,
    vehicles: Vec<Vehicle>, // row-major, indexed by GridCell::index
}

impl DigitContainer {
    pub fn new(position: DigitPosition, rect: ContainerRect, vehicle_size: &VehicleConfig) -> Self {
        let vehicles = GridCell::all()
            .map(|cell| {
                let positions = positions_for_cell(rect.size, vehicle_size, cell, cell.orientation());
                Vehicle::new(cell, positions)
            })
            .collect::<Vec<_>>();
        debug_assert_eq!(vehicles.len(), CELLS_PER_DIGIT);

        Self {
            position,
            rect,
            digit: None,
            vehicles,
        }
    }

    pub fn vehicle(&self, cell: GridCell) -> Option<&Vehicle> {
        self.vehicles.get(cell.index())
    }

    pub fn vehicle_mut(&mut self, cell: GridCell) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(cell.index())
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    /// Cells whose vehicle is currently in place, row-major.
    pub fn in_place_cells(&self) -> Vec<GridCell> {
        self.vehicles
            .iter()
            .filter(|v| v.state() == VehicleState::Active)
            .map(|v| v.cell)
            .collect()
    }

    pub fn relayout(&mut self, rect: ContainerRect, vehicle_size: &VehicleConfig) {
        self.rect = rect;
        for vehicle in self.vehicles.iter_mut() {
            let positions =
                positions_for_cell(rect.size, vehicle_size, vehicle.cell, vehicle.orientation());
            vehicle.relayout(positions);
        }
    }

    pub fn advance(&mut self, now: f32) {
        for vehicle in self.vehicles.iter_mut() {
            vehicle.advance(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;

    #[test]
    fn test_new_container_has_parked_fleet() {
        let rect = ContainerRect::new(0.0, 0.0, 250.0, 450.0);
        let container = DigitContainer::new(DigitPosition::HourOnes, rect, &VehicleConfig::default());

        assert_eq!(container.vehicles().count(), CELLS_PER_DIGIT);
        assert!(container.in_place_cells().is_empty());
        for cell in GridCell::all() {
            let vehicle = container.vehicle(cell).unwrap();
            assert_eq!(vehicle.cell, cell);
            assert_eq!(vehicle.position(), vehicle.positions().park);
        }
    }

    #[test]
    fn test_relayout_updates_positions() {
        let config = VehicleConfig::default();
        let mut container = DigitContainer::new(
            DigitPosition::MinuteTens,
            ContainerRect::new(0.0, 0.0, 250.0, 450.0),
            &config,
        );
        let cell = GridCell::new(8, 2);
        let before = container.vehicle(cell).unwrap().positions().in_place;

        container.relayout(ContainerRect::new(10.0, 10.0, 500.0, 900.0), &config);
        let after = container.vehicle(cell).unwrap().positions().in_place;

        assert_ne!(before, after);
        assert_eq!(after, vec2(2.0 * 100.0 + 33.0, 8.0 * 100.0 + 33.0));
        assert_eq!(container.vehicle(cell).unwrap().state(), VehicleState::Inactive);
    }

    #[test]
    fn test_position_keys() {
        let keys: Vec<&str> = DigitPosition::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys, vec!["hour-tens", "hour-ones", "min-tens", "min-ones"]);
        for (i, position) in DigitPosition::ALL.iter().enumerate() {
            assert_eq!(position.index(), i);
        }
    }
}
