// src/views/layout.rs
//
// Pixel layout of the clock.
//
// Container-local coordinates follow the page convention the vehicles were
// designed in: origin at the container's top-left corner, y growing down.
// `to_screen` converts to nannou's centred, y-up space for drawing.

use nannou::prelude::*;

use crate::config::{LayoutConfig, VehicleConfig};
use crate::models::{GridCell, Orientation, GRID_COLS, GRID_ROWS};

/// Parked vehicles sit at least this far outside their container.
pub const MIN_PARK_OFFSET: f32 = 180.0;
const HORIZONTAL_PARK_FACTOR: f32 = 0.9;
const VERTICAL_PARK_FACTOR: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub origin: Vec2, // top-left, window space (y down)
    pub size: Vec2,
}

impl ContainerRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: vec2(x, y),
            size: vec2(width, height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPositions {
    pub in_place: Vec2,
    pub park: Vec2,
}

/// In-place and park coordinates of a vehicle's top-left corner.
pub fn positions_for_cell(
    container_size: Vec2,
    vehicle: &VehicleConfig,
    cell: GridCell,
    orientation: Orientation,
) -> CellPositions {
    let cell_width = container_size.x / GRID_COLS as f32;
    let cell_height = container_size.y / GRID_ROWS as f32;
    let cell_x = cell.col as f32 * cell_width + (cell_width - vehicle.width) / 2.0;
    let cell_y = cell.row as f32 * cell_height + (cell_height - vehicle.height) / 2.0;

    let park = match orientation {
        // vertical lanes are fed from below the container
        Orientation::Vertical => {
            let offset = MIN_PARK_OFFSET.max((container_size.y * VERTICAL_PARK_FACTOR).round());
            vec2(cell_x, container_size.y + offset)
        }
        // horizontal lanes are fed from the left
        Orientation::Horizontal => {
            let offset =
                MIN_PARK_OFFSET.max((container_size.x * HORIZONTAL_PARK_FACTOR).round());
            vec2(-vehicle.width - offset, cell_y)
        }
    };

    CellPositions {
        in_place: vec2(cell_x, cell_y),
        park,
    }
}

/// Window-space (top-left, y down) to nannou space (centre, y up).
pub fn to_screen(window_size: Vec2, point: Vec2) -> Point2 {
    pt2(point.x - window_size.x / 2.0, window_size.y / 2.0 - point.y)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClockLayout {
    pub window_size: Vec2,
    pub containers: [ContainerRect; 4],
    pub colon_dots: [Vec2; 2],
    pub ampm_anchor: Vec2,
    pub controls_center: Vec2,
}

impl ClockLayout {
    pub fn compute(width: f32, height: f32, config: &LayoutConfig) -> Self {
        let gaps = 2.0 * config.container_gap + config.colon_gap;
        let usable_width = (width - 2.0 * config.margin - gaps).max(4.0);
        let usable_height = (height - 2.0 * config.margin - config.controls_height).max(1.0);

        // keep grid cells square
        let aspect = GRID_ROWS as f32 / GRID_COLS as f32;
        let mut container_width = usable_width / 4.0;
        let mut container_height = container_width * aspect;
        if container_height > usable_height {
            container_height = usable_height;
            container_width = container_height / aspect;
        }

        let total_width = 4.0 * container_width + gaps;
        let left = (width - total_width) / 2.0;
        let top = config.margin + (usable_height - container_height) / 2.0;

        let mut x = left;
        let mut containers = [ContainerRect::new(0.0, 0.0, 0.0, 0.0); 4];
        for (i, rect) in containers.iter_mut().enumerate() {
            *rect = ContainerRect::new(x, top, container_width, container_height);
            x += container_width;
            x += if i == 1 {
                config.colon_gap
            } else {
                config.container_gap
            };
        }

        let colon_x = containers[1].origin.x + container_width + config.colon_gap / 2.0;
        let colon_dots = [
            vec2(colon_x, top + container_height / 3.0),
            vec2(colon_x, top + container_height * 2.0 / 3.0),
        ];

        let last = containers[3];
        let ampm_anchor = vec2(last.origin.x + last.size.x + config.container_gap, top);
        let controls_center = vec2(width / 2.0, height - config.margin - config.controls_height / 2.0);

        Self {
            window_size: vec2(width, height),
            containers,
            colon_dots,
            ampm_anchor,
            controls_center,
        }
    }
}
