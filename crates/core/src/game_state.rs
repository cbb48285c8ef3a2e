//! Game state module - manages the complete game state
//!
//! This module ties together the grid, the move engine, the spawn policy and
//! the RNG. One call to [`GameState::apply_move`] is one whole turn: slide,
//! score, spawn, then re-check the won/lost flags. A turn is either applied
//! completely or not at all.

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::engine::{self, transform};
use crate::error::GameError;
use crate::grid::Grid;
use crate::snapshot::GameSnapshot;
use crate::spawn::Spawn;
use crate::types::{Direction, GameStatus, Tile};

/// What a call to [`GameState::apply_move`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The direction changes nothing; the state is untouched.
    NoChange,
    /// The grid moved. `spawned` is `None` only if no cell was left free.
    Moved { points: u32, spawned: Option<Spawn> },
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    pub fn points(&self) -> u32 {
        match self {
            MoveOutcome::NoChange => 0,
            MoveOutcome::Moved { points, .. } => *points,
        }
    }
}

/// Complete game state
///
/// The RNG is a type parameter so tests and tools can inject any generator;
/// the default is a seeded ChaCha8 stream.
#[derive(Debug, Clone)]
pub struct GameState<R = ChaCha8Rng> {
    config: GameConfig,
    grid: Grid,
    score: u32,
    /// Only ever raised, never reset.
    best_score: u32,
    won: bool,
    lost: bool,
    /// Monotonic episode id (increments on new game).
    episode_id: u32,
    /// Accepted moves in the current episode.
    moves: u32,
    last_move: Option<Direction>,
    rng: R,
}

impl GameState<ChaCha8Rng> {
    /// Create a started game with the default 4x4 config and the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self::from_parts(
            GameConfig::default(),
            Grid::default(),
            ChaCha8Rng::seed_from_u64(seed),
        );
        let seeded = state.seed_grid();
        debug_assert!(seeded.is_ok(), "default grid has room: {:?}", seeded);
        state
    }

    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_snapshot(
        snapshot: &GameSnapshot,
        config: GameConfig,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::restore(snapshot, config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a started game drawing spawns from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let grid = Grid::new(config.size)?;
        let mut state = Self::from_parts(config, grid, rng);
        state.seed_grid()?;
        Ok(state)
    }

    /// Rebuild a game from a persisted snapshot.
    ///
    /// Scores and cells are taken as-is; the won/lost flags are recomputed
    /// from the grid. Fails if the snapshot breaks the grid invariant or
    /// its size differs from `config.size`.
    pub fn restore(snapshot: &GameSnapshot, config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        if snapshot.size != config.size {
            return Err(GameError::SizeMismatch {
                config: config.size,
                snapshot: snapshot.size,
            });
        }
        let grid = snapshot.to_grid()?;

        let mut state = Self::from_parts(config, grid, rng);
        state.score = snapshot.score;
        state.best_score = snapshot.best_score;
        state.refresh_flags();
        Ok(state)
    }

    fn from_parts(config: GameConfig, grid: Grid, rng: R) -> Self {
        Self {
            config,
            grid,
            score: 0,
            best_score: 0,
            won: false,
            lost: false,
            episode_id: 0,
            moves: 0,
            last_move: None,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Some tile has reached the target. Play may continue.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// No direction changes the grid.
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_flags(self.won, self.lost)
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn last_move(&self) -> Option<Direction> {
        self.last_move
    }

    pub fn max_tile(&self) -> Tile {
        self.grid.max_tile()
    }

    /// Whether `direction` would change the grid. Never touches the score.
    pub fn check_move_valid(&self, direction: Direction) -> bool {
        engine::check_move_valid(&self.grid, direction)
    }

    pub fn valid_moves(&self) -> arrayvec::ArrayVec<Direction, 4> {
        engine::valid_moves(&self.grid)
    }

    /// Play one turn toward `direction`.
    ///
    /// A direction that changes nothing returns [`MoveOutcome::NoChange`]
    /// and leaves every field untouched. Otherwise the merged grid is
    /// adopted, its points are added, one tile spawns and the flags are
    /// recomputed. Entering the lost state ratchets the best score.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let result = transform(&self.grid, direction);
        if !result.changed {
            return MoveOutcome::NoChange;
        }

        self.grid = result.grid;
        self.score = self.score.saturating_add(result.points);
        let spawned = self.config.spawn.spawn_one(&mut self.grid, &mut self.rng);
        self.moves = self.moves.wrapping_add(1);
        self.last_move = Some(direction);

        debug!(
            "move {} gained {} points (score {}, spawned {:?})",
            direction, result.points, self.score, spawned
        );

        let (was_won, was_lost) = (self.won, self.lost);
        self.refresh_flags();

        if self.won && !was_won {
            info!(
                "reached {} after {} moves (score {})",
                self.config.target, self.moves, self.score
            );
        }
        if self.lost && !was_lost {
            self.ratchet_best_score();
            info!(
                "game over after {} moves: score {}, best {}",
                self.moves, self.score, self.best_score
            );
        }

        MoveOutcome::Moved {
            points: result.points,
            spawned,
        }
    }

    /// Start over: score back to zero, fresh opening tiles.
    ///
    /// The best score carries over (raised first if this game beat it) and
    /// the RNG stream continues rather than being reseeded.
    pub fn new_game(&mut self) {
        self.ratchet_best_score();
        self.score = 0;
        self.moves = 0;
        self.last_move = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        let seeded = self.seed_grid();
        debug_assert!(seeded.is_ok(), "validated grid has room: {:?}", seeded);
        info!(
            "new game (episode {}, best {})",
            self.episode_id, self.best_score
        );
    }

    /// Raise the best score to the current score if it is higher.
    ///
    /// Hosts call this at save points so a game in progress still counts.
    pub fn ratchet_best_score(&mut self) {
        self.best_score = self.best_score.max(self.score);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.score = self.score;
        out.best_score = self.best_score;
        out.size = self.grid.size();
        out.grid.clear();
        out.grid.extend_from_slice(self.grid.cells());
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Clear the grid and place the opening tiles.
    ///
    /// Fails only if the grid has fewer than two cells, which validated
    /// sizes rule out.
    fn seed_grid(&mut self) -> Result<(), GameError> {
        self.grid.clear();
        self.config
            .spawn
            .spawn_initial(&mut self.grid, &mut self.rng)?;
        self.refresh_flags();
        Ok(())
    }

    fn refresh_flags(&mut self) {
        self.won = engine::reached_target(&self.grid, self.config.target);
        self.lost = engine::is_lost(&self.grid);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
