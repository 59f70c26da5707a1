use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Cell, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => f.write_str("female"),
            Gender::Male => f.write_str("male"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Height {
    Short,
    Tall,
}

impl Height {
    pub const ALL: [Height; 2] = [Height::Short, Height::Tall];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Slim,
    Fat,
}

impl Weight {
    pub const ALL: [Weight; 2] = [Weight::Slim, Weight::Fat];
}

/// A frog's trait triple. Fixed at creation; a frog that moves is relocated,
/// never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frog {
    gender: Gender,
    height: Height,
    weight: Weight,
}

impl Frog {
    pub const fn new(gender: Gender, height: Height, weight: Weight) -> Self {
        Self {
            gender,
            height,
            weight,
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn height(&self) -> Height {
        self.height
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    fn glyph(&self) -> char {
        match (self.gender, self.height) {
            (Gender::Female, Height::Short) => 'f',
            (Gender::Female, Height::Tall) => 'F',
            (Gender::Male, Height::Short) => 'm',
            (Gender::Male, Height::Tall) => 'M',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Occupant {
    #[default]
    Empty,
    Frog(Frog),
}

impl Occupant {
    pub fn frog(&self) -> Option<Frog> {
        match self {
            Occupant::Empty => None,
            Occupant::Frog(frog) => Some(*frog),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Occupant::Empty)
    }
}

/// Raised when a coordinate outside the pond reaches the board. This is a
/// caller defect, not a rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell {cell} is outside the {height}x{width} pond")]
pub struct OutOfBoundsError {
    pub cell: Cell,
    pub height: usize,
    pub width: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrogSnapshot {
    pub row: usize,
    pub col: usize,
    #[serde(flatten)]
    pub frog: Frog,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub height: usize,
    pub width: usize,
    pub frog_count: usize,
    pub frogs: Vec<FrogSnapshot>,
}

/// The pond: one occupant per cell, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    cells: Vec<Occupant>,
}

impl Board {
    /// A board with every cell empty.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![Occupant::Empty; grid.cell_count()],
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn occupant_at(&self, cell: Cell) -> Result<Occupant, OutOfBoundsError> {
        let index = self.index(cell)?;
        Ok(self.cells[index])
    }

    /// Replace the occupant at `cell`, returning what was there. No rule
    /// checks happen here.
    pub fn set_occupant(
        &mut self,
        cell: Cell,
        occupant: Occupant,
    ) -> Result<Occupant, OutOfBoundsError> {
        let index = self.index(cell)?;
        Ok(std::mem::replace(&mut self.cells[index], occupant))
    }

    /// Move whatever sits on `from` onto `to` and leave `from` empty. Both
    /// cells are bounds-checked before anything changes.
    pub fn relocate(&mut self, from: Cell, to: Cell) -> Result<(), OutOfBoundsError> {
        let source = self.index(from)?;
        let target = self.index(to)?;
        let occupant = std::mem::take(&mut self.cells[source]);
        self.cells[target] = occupant;
        Ok(())
    }

    pub fn is_empty(&self, cell: Cell) -> Result<bool, OutOfBoundsError> {
        Ok(self.occupant_at(cell)?.is_empty())
    }

    pub fn has_frog(&self, cell: Cell) -> Result<bool, OutOfBoundsError> {
        Ok(!self.is_empty(cell)?)
    }

    pub fn frog_at(&self, cell: Cell) -> Result<Option<Frog>, OutOfBoundsError> {
        Ok(self.occupant_at(cell)?.frog())
    }

    /// True only when `cell` holds a frog of `gender`. Empty and off-grid
    /// cells answer false.
    pub fn is_gender(&self, cell: Cell, gender: Gender) -> bool {
        matches!(
            self.occupant_at(cell),
            Ok(Occupant::Frog(frog)) if frog.gender() == gender
        )
    }

    pub fn frog_count(&self) -> usize {
        self.cells.iter().filter(|occupant| !occupant.is_empty()).count()
    }

    /// Frogs in row-major order.
    pub fn frogs(&self) -> impl Iterator<Item = (Cell, Frog)> + '_ {
        self.grid
            .cells()
            .zip(self.cells.iter())
            .filter_map(|(cell, occupant)| occupant.frog().map(|frog| (cell, frog)))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            height: self.grid.height(),
            width: self.grid.width(),
            frog_count: self.frog_count(),
            frogs: self
                .frogs()
                .map(|(cell, frog)| FrogSnapshot {
                    row: cell.row,
                    col: cell.col,
                    frog,
                })
                .collect(),
        }
    }

    fn index(&self, cell: Cell) -> Result<usize, OutOfBoundsError> {
        self.grid.index_of(cell).ok_or(OutOfBoundsError {
            cell,
            height: self.grid.height(),
            width: self.grid.width(),
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.grid.width()) {
            let line: String = row
                .iter()
                .map(|occupant| occupant.frog().map_or('.', |frog| frog.glyph()))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
