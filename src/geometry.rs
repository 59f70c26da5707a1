//! Pure coordinate predicates used by move validation

use crate::grid::Cell;

/// Chebyshev (king-move) distance between two cells.
pub fn distance(a: Cell, b: Cell) -> usize {
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col))
}

/// True when the cells share a row, a column or an exact diagonal.
/// Also true for `a == b`.
pub fn on_same_line(a: Cell, b: Cell) -> bool {
    a.row == b.row || a.col == b.col || a.row.abs_diff(b.row) == a.col.abs_diff(b.col)
}
