//! Game configuration
//!
//! # Environment Variables
//!
//! - `MERGE2048_SIZE`: grid edge length (default: 4)
//! - `MERGE2048_TARGET`: tile value that wins (default: 2048)
//! - `MERGE2048_SPAWN_WEIGHTS`: weights for 2 and 4 as `"a,b"` (default: "15,1")
//!
//! Unparsable values fall back to the defaults; the assembled config is then
//! validated like any other.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::spawn::SpawnPolicy;
use crate::types::{
    is_tile_value, Tile, DEFAULT_GRID_SIZE, DEFAULT_TARGET, MAX_GRID_SIZE, MIN_GRID_SIZE,
    SPAWN_VALUES, SPAWN_WEIGHTS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid edge length
    pub size: usize,
    /// Tile value that sets the won flag
    pub target: Tile,
    pub spawn: SpawnPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            target: DEFAULT_TARGET,
            spawn: SpawnPolicy::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(ConfigError::UnsupportedSize(self.size));
        }
        if !is_tile_value(self.target) {
            return Err(ConfigError::InvalidTarget(self.target));
        }
        self.spawn.validate()
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        use std::env;

        let size = env::var("MERGE2048_SIZE")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_GRID_SIZE);

        let target = env::var("MERGE2048_TARGET")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_TARGET);

        let weights = env::var("MERGE2048_SPAWN_WEIGHTS")
            .ok()
            .and_then(|s| parse_weights(&s))
            .unwrap_or(SPAWN_WEIGHTS);

        let config = Self {
            size,
            target,
            spawn: SpawnPolicy::new(SPAWN_VALUES, weights)?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse `"15,1"` into `[15, 1]`.
fn parse_weights(s: &str) -> Option<[u32; 2]> {
    let (a, b) = s.split_once(',')?;
    Some([a.trim().parse().ok()?, b.trim().parse().ok()?])
}
