//! Spawn module - new tiles after each move and at game start
//!
//! Cells are chosen uniformly among the empty ones. Values are a weighted
//! choice over two tile values, `[2, 4]` with weights `[15, 1]` by default.
//! The generator is always passed in, so a seeded RNG reproduces a game.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GameError};
use crate::grid::Grid;
use crate::types::{is_tile_value, Tile, INITIAL_TILES, SPAWN_VALUES, SPAWN_WEIGHTS};

/// A tile placed by the spawn policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Which values appear and how often
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPolicy {
    values: [Tile; 2],
    weights: [u32; 2],
}

impl SpawnPolicy {
    pub fn new(values: [Tile; 2], weights: [u32; 2]) -> Result<Self, ConfigError> {
        let policy = Self { values, weights };
        policy.validate()?;
        Ok(policy)
    }

    /// Check values are tiles and at least one weight is non-zero.
    ///
    /// Deserialized policies bypass [`SpawnPolicy::new`], so
    /// [`GameConfig::validate`](crate::GameConfig::validate) calls this too.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(&bad) = self.values.iter().find(|&&v| !is_tile_value(v)) {
            return Err(ConfigError::InvalidSpawnValue(bad));
        }
        if self.total_weight() == 0 {
            return Err(ConfigError::ZeroSpawnWeights);
        }
        Ok(())
    }

    pub fn values(&self) -> [Tile; 2] {
        self.values
    }

    pub fn weights(&self) -> [u32; 2] {
        self.weights
    }

    fn total_weight(&self) -> u64 {
        self.weights.iter().map(|&w| u64::from(w)).sum()
    }

    /// Draw a tile value according to the weights.
    pub fn choose_value<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        let roll = rng.gen_range(0..self.total_weight());
        if roll < u64::from(self.weights[0]) {
            self.values[0]
        } else {
            self.values[1]
        }
    }

    /// Place one tile on a random empty cell.
    ///
    /// Returns `None` and leaves the grid alone when it is full.
    pub fn spawn_one<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> Option<Spawn> {
        let empty = grid.count_empty();
        if empty == 0 {
            return None;
        }
        let pick = rng.gen_range(0..empty);
        let idx = grid.empty_cells().nth(pick)?;
        Some(self.place(grid, idx, rng))
    }

    /// Place the two opening tiles on two distinct random empty cells.
    pub fn spawn_initial<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<[Spawn; INITIAL_TILES], GameError> {
        let empty: Vec<usize> = grid.empty_cells().collect();
        if empty.len() < INITIAL_TILES {
            return Err(GameError::NotEnoughSpace {
                needed: INITIAL_TILES,
                available: empty.len(),
            });
        }

        // Sampling without replacement keeps the two cells distinct.
        let picks = index::sample(rng, empty.len(), INITIAL_TILES);
        let first = self.place(grid, empty[picks.index(0)], rng);
        let second = self.place(grid, empty[picks.index(1)], rng);
        Ok([first, second])
    }

    fn place<R: Rng + ?Sized>(&self, grid: &mut Grid, idx: usize, rng: &mut R) -> Spawn {
        let value = self.choose_value(rng);
        grid.cells_mut()[idx] = value;
        let (row, col) = grid.position(idx);
        Spawn { row, col, value }
    }
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            values: SPAWN_VALUES,
            weights: SPAWN_WEIGHTS,
        }
    }
}
