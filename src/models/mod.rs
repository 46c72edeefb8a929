pub mod digit_model;
pub mod geometry;

pub use digit_model::{digit_segments, DigitPatterns};
pub use geometry::{
    cell_orientation, GridCell, Orientation, Segment, CELLS_PER_DIGIT, GRID_COLS, GRID_ROWS,
};
