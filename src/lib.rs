pub mod board;
pub mod engine;
pub mod geometry;
pub mod grid;
pub mod report;
pub mod rng;
pub mod scenario;
pub mod selection;
pub mod session;

pub use board::{Board, Frog, Gender, Height, Occupant, OutOfBoundsError, Weight};
pub use engine::{Birth, Jump, JumpError, MoveEngine, ReproduceError};
pub use grid::{Cell, Grid};
pub use report::{LogReporter, Reporter};
pub use rng::{PickOne, RngManager, ScriptedPicks, SeededPicker};
pub use scenario::{Scenario, ScenarioLoader};
pub use selection::Selection;
pub use session::{Move, MoveError, Outcome, Session};
