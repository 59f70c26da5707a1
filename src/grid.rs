//! Grid addressing - cells of the lily pond and their bounds

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(row, col)` position on the pond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Dimensions of the pond. Every valid cell satisfies
/// `row < height` and `col < width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
}

impl Grid {
    /// Returns `None` when either dimension is zero.
    pub fn new(height: usize, width: usize) -> Option<Self> {
        if height == 0 || width == 0 {
            None
        } else {
            Some(Self { height, width })
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Row-major index of an on-grid cell.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.width + cell.col)
        } else {
            None
        }
    }

    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index < self.cell_count() {
            Some(Cell::new(index / self.width, index % self.width))
        } else {
            None
        }
    }

    /// Shift a cell by a signed offset, `None` if the result leaves the grid.
    pub fn offset(&self, cell: Cell, d_row: isize, d_col: isize) -> Option<Cell> {
        let row = cell.row.checked_add_signed(d_row)?;
        let col = cell.col.checked_add_signed(d_col)?;
        let shifted = Cell::new(row, col);
        self.contains(shifted).then_some(shifted)
    }

    /// On-grid cells of the 3x3 block centred on `center`, scanned top row
    /// first, left to right, with `center` itself fifth.
    pub fn neighborhood(&self, center: Cell) -> impl Iterator<Item = Cell> + '_ {
        (-1..=1isize).flat_map(move |d_row| {
            (-1..=1isize).filter_map(move |d_col| self.offset(center, d_row, d_col))
        })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).map(move |index| Cell::new(index / self.width, index % self.width))
    }
}
