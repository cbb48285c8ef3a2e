//! Error types for grid construction, configuration and game setup.
//!
//! Gameplay itself never fails: a move that changes nothing is reported as
//! [`MoveOutcome::NoChange`](crate::MoveOutcome::NoChange). Everything here is
//! raised while *building* state from outside input.

use crate::types::{Tile, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Malformed grid shape or contents.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size {0} is outside {min}..={max}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    InvalidSize(usize),
    #[error("row {row} has {len} cells, expected {size}")]
    RaggedRow { row: usize, len: usize, size: usize },
    #[error("expected {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },
    #[error("cell ({row}, {col}) holds {value}, which is not a tile value")]
    InvalidTile { row: usize, col: usize, value: Tile },
    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// Invalid [`GameConfig`](crate::GameConfig) or
/// [`SpawnPolicy`](crate::SpawnPolicy) settings.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size {0} is outside {min}..={max}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    UnsupportedSize(usize),
    #[error("target {0} is not a tile value")]
    InvalidTarget(Tile),
    #[error("spawn value {0} is not a tile value")]
    InvalidSpawnValue(Tile),
    #[error("spawn weights must not all be zero")]
    ZeroSpawnWeights,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("need {needed} empty cells, found {available}")]
    NotEnoughSpace { needed: usize, available: usize },
    #[error("snapshot is {snapshot}x{snapshot} but the config expects {config}x{config}")]
    SizeMismatch { config: usize, snapshot: usize },
}
