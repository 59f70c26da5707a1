use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, Frog, Gender, Height, Occupant, Weight};
use crate::grid::{Cell, Grid};
use crate::rng::PickOne;
use crate::session::Move;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub seed: u64,
    pub height: usize,
    pub width: usize,
    #[serde(default)]
    pub frogs: Vec<FrogPlacement>,
    #[serde(default)]
    pub moves: Vec<Move>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// A starting frog. Traits left out are picked at random during setup.
#[derive(Debug, Clone, Deserialize)]
pub struct FrogPlacement {
    pub row: usize,
    pub col: usize,
    pub gender: Gender,
    pub height: Option<Height>,
    pub weight: Option<Weight>,
}

impl FrogPlacement {
    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("pond must be at least 1x1, got {height}x{width}")]
    EmptyPond { height: usize, width: usize },
    #[error("frog at {cell} lies outside the {height}x{width} pond")]
    FrogOffGrid {
        cell: Cell,
        height: usize,
        width: usize,
    },
    #[error("more than one frog placed at {0}")]
    DuplicateFrog(Cell),
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Read, parse and validate a scenario file relative to the base dir.
    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        scenario
            .validate()
            .with_context(|| format!("Invalid scenario {}", path.display()))?;
        debug!(name = %scenario.name, frogs = scenario.frogs.len(), moves = scenario.moves.len(), "scenario loaded");
        Ok(scenario)
    }
}

impl Scenario {
    pub fn grid(&self) -> Result<Grid, ScenarioError> {
        Grid::new(self.height, self.width).ok_or(ScenarioError::EmptyPond {
            height: self.height,
            width: self.width,
        })
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        let grid = self.grid()?;
        let mut seen = HashSet::new();
        for placement in &self.frogs {
            let cell = placement.cell();
            if !grid.contains(cell) {
                return Err(ScenarioError::FrogOffGrid {
                    cell,
                    height: self.height,
                    width: self.width,
                });
            }
            if !seen.insert(cell) {
                return Err(ScenarioError::DuplicateFrog(cell));
            }
        }
        Ok(())
    }

    /// Empty pond with the listed frogs placed on it. Missing height and
    /// weight are drawn from `picker`.
    pub fn build_board(&self, picker: &mut impl PickOne) -> Result<Board, ScenarioError> {
        self.validate()?;
        let mut board = Board::new(self.grid()?);
        for placement in &self.frogs {
            let height = placement
                .height
                .unwrap_or_else(|| picker.pick_one(Height::ALL));
            let weight = placement
                .weight
                .unwrap_or_else(|| picker.pick_one(Weight::ALL));
            let frog = Frog::new(placement.gender, height, weight);
            let cell = placement.cell();
            board
                .set_occupant(cell, Occupant::Frog(frog))
                .map_err(|err| ScenarioError::FrogOffGrid {
                    cell: err.cell,
                    height: err.height,
                    width: err.width,
                })?;
        }
        info!(
            scenario = %self.name,
            height = self.height,
            width = self.width,
            frogs = board.frog_count(),
            "pond ready"
        );
        Ok(board)
    }
}
