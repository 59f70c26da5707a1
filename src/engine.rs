//! Jump and reproduction rules.
//!
//! Every move validates against the current board first and only then
//! mutates it, so a rejected move leaves the board exactly as it was.

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, Frog, Gender, OutOfBoundsError, Occupant};
use crate::geometry::{distance, on_same_line};
use crate::grid::Cell;
use crate::rng::PickOne;
use crate::selection::{self, SelectionCountError};

/// Distance a frog of the given gender must cover in one jump.
pub fn jump_distance(gender: Gender) -> usize {
    match gender {
        Gender::Female => 2,
        Gender::Male => 3,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JumpError {
    #[error("Select 2 cells to jump")]
    SelectionCount(#[from] SelectionCountError),

    #[error("Select at least one frog")]
    NoFrogSelected,

    #[error("2 frogs selected - select one free space")]
    AmbiguousTarget,

    #[error("Frog can only jump by line (including diagonal)")]
    InvalidDirection { from: Cell, to: Cell },

    #[error("{} frog can jump only on {required} cells", title(.gender))]
    InvalidJumpDistance {
        gender: Gender,
        required: usize,
        actual: usize,
    },

    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),
}

impl JumpError {
    /// False for caller defects that should never be shown to a player.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, JumpError::OutOfBounds(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReproduceError {
    #[error("Select 2 frogs to reproduce")]
    SelectionCount(#[from] SelectionCountError),

    #[error("Select 2 frogs to reproduce")]
    MissingFrog { cell: Cell },

    #[error("Frogs should be together to reproduce")]
    FrogsNotAdjacent { distance: usize },

    #[error("Frogs should have different gender to reproduce")]
    SameGender { gender: Gender },

    #[error("No place to reproduce")]
    NoPlacementSpace { mother: Cell },

    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),
}

impl ReproduceError {
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, ReproduceError::OutOfBounds(_))
    }
}

fn title(gender: &Gender) -> &'static str {
    match gender {
        Gender::Female => "Female",
        Gender::Male => "Male",
    }
}

/// A completed jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub frog: Frog,
    pub from: Cell,
    pub to: Cell,
}

/// A completed reproduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birth {
    pub mother: Cell,
    pub father: Cell,
    pub child: Frog,
    pub cell: Cell,
}

#[derive(Debug, Clone, Copy)]
struct Parents {
    mother_cell: Cell,
    mother: Frog,
    father_cell: Cell,
    father: Frog,
}

/// Owns the board and the random source used for inheritance.
pub struct MoveEngine<P> {
    board: Board,
    picker: P,
}

impl<P: PickOne> MoveEngine<P> {
    pub fn new(board: Board, picker: P) -> Self {
        Self { board, picker }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn picker_mut(&mut self) -> &mut P {
        &mut self.picker
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Entry point for a jump triggered with the current selection.
    pub fn perform_jump(&mut self, selected: &[Cell]) -> Result<Jump, JumpError> {
        let [first, second] = selection::pair(selected)?;
        self.jump(first, second)
    }

    /// Entry point for a reproduction triggered with the current selection.
    pub fn perform_reproduce(&mut self, selected: &[Cell]) -> Result<Birth, ReproduceError> {
        let [first, second] = selection::pair(selected)?;
        self.reproduce(first, second)
    }

    /// Move the single frog among `first`/`second` onto the other, empty cell.
    pub fn jump(&mut self, first: Cell, second: Cell) -> Result<Jump, JumpError> {
        let jump = plan_jump(&self.board, first, second).map_err(|err| {
            debug!(%first, %second, %err, "jump rejected");
            err
        })?;
        self.board.relocate(jump.from, jump.to)?;
        info!(from = %jump.from, to = %jump.to, gender = %jump.frog.gender(), "frog jumped");
        Ok(jump)
    }

    /// Spawn a child of the two frogs at `first` and `second` next to the
    /// mother.
    pub fn reproduce(&mut self, first: Cell, second: Cell) -> Result<Birth, ReproduceError> {
        let parents = check_parents(&self.board, first, second).map_err(|err| {
            debug!(%first, %second, %err, "reproduction rejected");
            err
        })?;
        let child = inherit(&mut self.picker, parents.mother, parents.father);
        let cell = find_nursery(&self.board, parents.mother_cell).ok_or_else(|| {
            debug!(mother = %parents.mother_cell, "no empty cell around mother");
            ReproduceError::NoPlacementSpace {
                mother: parents.mother_cell,
            }
        })?;
        self.board.set_occupant(cell, Occupant::Frog(child))?;
        info!(%cell, gender = %child.gender(), "frog born");
        Ok(Birth {
            mother: parents.mother_cell,
            father: parents.father_cell,
            child,
            cell,
        })
    }
}

fn plan_jump(board: &Board, first: Cell, second: Cell) -> Result<Jump, JumpError> {
    let (from, to, frog) = match (board.frog_at(first)?, board.frog_at(second)?) {
        (None, None) => return Err(JumpError::NoFrogSelected),
        (Some(_), Some(_)) => return Err(JumpError::AmbiguousTarget),
        (Some(frog), None) => (first, second, frog),
        (None, Some(frog)) => (second, first, frog),
    };

    if !on_same_line(from, to) {
        return Err(JumpError::InvalidDirection { from, to });
    }

    let required = jump_distance(frog.gender());
    let actual = distance(from, to);
    if actual != required {
        return Err(JumpError::InvalidJumpDistance {
            gender: frog.gender(),
            required,
            actual,
        });
    }

    Ok(Jump { frog, from, to })
}

fn check_parents(board: &Board, first: Cell, second: Cell) -> Result<Parents, ReproduceError> {
    let a = board
        .frog_at(first)?
        .ok_or(ReproduceError::MissingFrog { cell: first })?;
    let b = board
        .frog_at(second)?
        .ok_or(ReproduceError::MissingFrog { cell: second })?;

    let apart = distance(first, second);
    if apart > 1 {
        return Err(ReproduceError::FrogsNotAdjacent { distance: apart });
    }

    match (a.gender(), b.gender()) {
        (Gender::Female, Gender::Male) => Ok(Parents {
            mother_cell: first,
            mother: a,
            father_cell: second,
            father: b,
        }),
        (Gender::Male, Gender::Female) => Ok(Parents {
            mother_cell: second,
            mother: b,
            father_cell: first,
            father: a,
        }),
        (gender, _) => Err(ReproduceError::SameGender { gender }),
    }
}

/// Each cosmetic trait comes from one parent at random; gender is drawn
/// independently of both.
pub fn inherit(picker: &mut impl PickOne, mother: Frog, father: Frog) -> Frog {
    let weight = picker.pick_one([mother.weight(), father.weight()]);
    let height = picker.pick_one([mother.height(), father.height()]);
    let gender = picker.pick_one(Gender::ALL);
    Frog::new(gender, height, weight)
}

/// First empty on-grid cell of the 3x3 block around the mother, in
/// row-major order. The mother's own cell is a candidate but is never empty
/// while she sits on it.
pub fn find_nursery(board: &Board, mother: Cell) -> Option<Cell> {
    board
        .grid()
        .neighborhood(mother)
        .find(|cell| matches!(board.is_empty(*cell), Ok(true)))
}
