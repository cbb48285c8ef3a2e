//! Save-file persistence for merge2048 games.
//!
//! A game is stored as one JSON [`GameSnapshot`]. Writes go to a sibling
//! `.tmp` file first and are renamed into place, so a crash mid-write never
//! leaves a truncated save behind.
//!
//! # Environment Variables
//!
//! - `MERGE2048_SAVE_PATH`: save file location (default: "savegame.json")

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use merge2048_core::{GameConfig, GameSnapshot, GameState};

pub const DEFAULT_SAVE_PATH: &str = "savegame.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

impl StoreConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let path = std::env::var("MERGE2048_SAVE_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));
        Self { path }
    }
}

/// Reads and writes one snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    config: StoreConfig,
}

impl SnapshotStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig { path: path.into() })
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Read the saved snapshot.
    ///
    /// Returns `Ok(None)` when there is no save file. An unreadable or
    /// malformed file is an error. Tile values are not checked here; that
    /// happens when a game is restored from the snapshot.
    pub fn load(&self) -> Result<Option<GameSnapshot>> {
        let path = self.path();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        let snapshot = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Some(snapshot))
    }

    /// Write `snapshot`, replacing any previous save.
    pub fn save(&self, snapshot: &GameSnapshot) -> Result<()> {
        let path = self.path();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let json = serde_json::to_string(snapshot).context("failed to encode snapshot")?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json).with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, path).with_context(|| {
            format!("failed to move {} to {}", tmp.display(), path.display())
        })?;

        debug!("saved game to {}", path.display());
        Ok(())
    }

    /// Restore the saved game, or start a fresh one.
    ///
    /// A missing save starts quietly. A save that cannot be read, parsed or
    /// restored under `config` is logged and replaced by a new game.
    pub fn resume(&self, config: GameConfig, seed: u64) -> GameState {
        match self.load() {
            Ok(Some(snapshot)) => match GameState::from_snapshot(&snapshot, config, seed) {
                Ok(state) => {
                    info!(
                        "resumed game from {} (score {}, best {})",
                        self.path().display(),
                        state.score(),
                        state.best_score()
                    );
                    return state;
                }
                Err(err) => warn!(
                    "discarding saved game at {}: {}",
                    self.path().display(),
                    err
                ),
            },
            Ok(None) => debug!("no saved game at {}", self.path().display()),
            Err(err) => warn!("discarding saved game: {:#}", err),
        }

        match GameState::with_config(config, seed) {
            Ok(state) => state,
            Err(err) => {
                warn!("invalid game config ({}), using defaults", err);
                GameState::new(seed)
            }
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.config.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
