//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the sliding-tile merge game: the grid,
//! line reduction, whole-grid moves, tile spawning and the game lifecycle.
//! It performs no I/O; persistence lives in `merge2048-store`.
//!
//! - **Deterministic**: the same seed and move sequence give the same game
//! - **Testable**: the reducer and engine are free functions over plain data
//! - **Portable**: runs headless, under a UI, or inside a search loop
//!
//! # Module Structure
//!
//! - [`grid`]: square row-major grid and directional line access
//! - [`reducer`]: slide-and-merge of a single line
//! - [`engine`]: apply a direction to a grid, validity and terminal checks
//! - [`spawn`]: weighted random tile placement
//! - [`config`]: grid size, target tile and spawn weights
//! - [`game_state`]: score, best score, won/lost flags and the turn loop
//! - [`snapshot`]: serializable view used for save/restore
//!
//! # Game Rules
//!
//! - A move slides every tile as far as it goes toward one edge.
//! - Two equal neighbours merge into their sum, once per move per tile,
//!   resolving from the leading edge.
//! - The merged value is added to the score.
//! - A move that changes nothing is rejected and spawns nothing.
//! - After every accepted move one tile spawns: 2 with weight 15, 4 with
//!   weight 1, on a uniformly chosen empty cell.
//! - Reaching the target tile sets the won flag; play may continue.
//! - The game is lost when no direction changes the grid.
//!
//! # Example
//!
//! ```
//! use merge2048_core::GameState;
//! use merge2048_core::types::Direction;
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.grid().count_empty(), 14);
//!
//! for dir in Direction::ALL {
//!     if game.check_move_valid(dir) {
//!         let outcome = game.apply_move(dir);
//!         assert!(outcome.is_moved());
//!         break;
//!     }
//! }
//! assert_eq!(game.moves(), 1);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod reducer;
pub mod snapshot;
pub mod spawn;

pub use merge2048_types as types;

pub use config::GameConfig;
pub use engine::{
    check_move_valid, has_valid_move, is_lost, reached_target, transform, valid_moves, MoveResult,
};
pub use error::{ConfigError, GameError, GridError};
pub use game_state::{GameState, MoveOutcome};
pub use grid::{Grid, Line};
pub use reducer::reduce;
pub use snapshot::GameSnapshot;
pub use spawn::{Spawn, SpawnPolicy};
