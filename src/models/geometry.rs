// src/models/geometry.rs
// The fixed 9x5 cell grid every digit is built on

pub const GRID_ROWS: usize = 9;
pub const GRID_COLS: usize = 5;
pub const CELLS_PER_DIGIT: usize = GRID_ROWS * GRID_COLS;

// rows that carry the top, middle and bottom lanes
const HORIZONTAL_ROWS: [usize; 3] = [0, 4, 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = GridCell> {
        (0..GRID_ROWS).flat_map(|row| (0..GRID_COLS).map(move |col| GridCell::new(row, col)))
    }

    /// Position of the cell in row-major order.
    pub fn index(&self) -> usize {
        self.row * GRID_COLS + self.col
    }

    pub fn orientation(&self) -> Orientation {
        cell_orientation(self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Lanes form a racetrack: horizontal at the top, middle and bottom,
/// joined by vertical lanes down the outer columns.
pub fn cell_orientation(row: usize, col: usize) -> Orientation {
    if HORIZONTAL_ROWS.contains(&row) {
        return Orientation::Horizontal;
    }
    if col == 0 || col == GRID_COLS - 1 {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    pub fn cells(&self) -> Vec<GridCell> {
        match self {
            Segment::A => cells_for_rows(&[0], &[1, 2, 3]),
            Segment::B => cells_for_rows(&[1, 2, 3], &[4]),
            Segment::C => cells_for_rows(&[5, 6, 7], &[4]),
            Segment::D => cells_for_rows(&[8], &[1, 2, 3]),
            Segment::E => cells_for_rows(&[5, 6, 7], &[0]),
            Segment::F => cells_for_rows(&[1, 2, 3], &[0]),
            Segment::G => cells_for_rows(&[4], &[1, 2, 3]),
        }
    }
}

fn cells_for_rows(rows: &[usize], cols: &[usize]) -> Vec<GridCell> {
    rows.iter()
        .flat_map(|&row| cols.iter().map(move |&col| GridCell::new(row, col)))
        .collect()
}
