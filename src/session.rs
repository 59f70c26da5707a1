//! Glue between a selection-driven UI and the move engine.
//!
//! A session keeps the player's selected cells, runs moves against them,
//! explains rejections through a [`Reporter`], and clears the selection after
//! every successful move.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::board::Board;
use crate::engine::{Birth, Jump, JumpError, MoveEngine, ReproduceError};
use crate::grid::Cell;
use crate::report::Reporter;
use crate::rng::PickOne;
use crate::selection::Selection;

/// A move as a UI trigger (or a scenario script) names it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Move {
    Jump { cells: Vec<Cell> },
    Reproduce { cells: Vec<Cell> },
}

impl Move {
    pub fn cells(&self) -> &[Cell] {
        match self {
            Move::Jump { cells } | Move::Reproduce { cells } => cells,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Jumped(Jump),
    Born(Birth),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    Jump(#[from] JumpError),
    #[error(transparent)]
    Reproduce(#[from] ReproduceError),
}

impl MoveError {
    pub fn is_user_facing(&self) -> bool {
        match self {
            MoveError::Jump(err) => err.is_user_facing(),
            MoveError::Reproduce(err) => err.is_user_facing(),
        }
    }
}

pub struct Session<P, R> {
    engine: MoveEngine<P>,
    selection: Selection,
    reporter: R,
}

impl<P: PickOne, R: Reporter> Session<P, R> {
    pub fn new(engine: MoveEngine<P>, reporter: R) -> Self {
        Self {
            engine,
            selection: Selection::new(),
            reporter,
        }
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn engine(&self) -> &MoveEngine<P> {
        &self.engine
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn toggle(&mut self, cell: Cell) -> bool {
        self.selection.toggle(cell)
    }

    pub fn jump(&mut self) -> Result<Jump, JumpError> {
        let result = self.engine.perform_jump(self.selection.cells());
        self.settle(result, JumpError::is_user_facing)
    }

    pub fn reproduce(&mut self) -> Result<Birth, ReproduceError> {
        let result = self.engine.perform_reproduce(self.selection.cells());
        self.settle(result, ReproduceError::is_user_facing)
    }

    /// Replace the selection with the move's cells and run it.
    pub fn play(&mut self, mv: &Move) -> Result<Outcome, MoveError> {
        self.selection = mv.cells().iter().copied().collect();
        match mv {
            Move::Jump { .. } => Ok(Outcome::Jumped(self.jump()?)),
            Move::Reproduce { .. } => Ok(Outcome::Born(self.reproduce()?)),
        }
    }

    pub fn into_parts(self) -> (MoveEngine<P>, R) {
        (self.engine, self.reporter)
    }

    fn settle<T, E: std::fmt::Display>(
        &mut self,
        result: Result<T, E>,
        user_facing: fn(&E) -> bool,
    ) -> Result<T, E> {
        match &result {
            Ok(_) => self.selection.clear(),
            Err(err) if user_facing(err) => self.reporter.report(&err.to_string()),
            Err(err) => error!(%err, selection = ?self.selection.cells(), "move touched a cell outside the pond"),
        }
        result
    }
}
