//! Selected cells as collected by the UI, and the shape check moves need

use thiserror::Error;

use crate::grid::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected 2 selected cells, got {selected}")]
pub struct SelectionCountError {
    pub selected: usize,
}

/// Both moves take exactly two cells. Order is passed through untouched.
pub fn pair(cells: &[Cell]) -> Result<[Cell; 2], SelectionCountError> {
    match cells {
        [first, second] => Ok([*first, *second]),
        _ => Err(SelectionCountError {
            selected: cells.len(),
        }),
    }
}

/// Checkbox-style selection: each cell is either selected or not, kept in
/// the order it was first selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<Cell>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a cell's state. Returns true if it is selected afterwards.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.deselect(cell) {
            false
        } else {
            self.cells.push(cell);
            true
        }
    }

    pub fn select(&mut self, cell: Cell) {
        if !self.is_selected(cell) {
            self.cells.push(cell);
        }
    }

    /// Returns true if the cell was selected.
    pub fn deselect(&mut self, cell: Cell) -> bool {
        let before = self.cells.len();
        self.cells.retain(|selected| *selected != cell);
        self.cells.len() != before
    }

    pub fn is_selected(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl FromIterator<Cell> for Selection {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for cell in iter {
            selection.select(cell);
        }
        selection
    }
}
