//! Headless merge2048 runner (default binary).
//!
//! Resumes the saved game (or starts one), auto-plays it with a fixed
//! direction preference until it is lost or the move budget is spent, then
//! saves and prints the final position.
//!
//! # Environment Variables
//!
//! - `MERGE2048_SEED`: RNG seed (default: derived from the clock)
//! - `MERGE2048_MAX_MOVES`: move budget for this run (default: 2000)
//! - `MERGE2048_SIZE`, `MERGE2048_TARGET`, `MERGE2048_SPAWN_WEIGHTS`: game config
//! - `MERGE2048_SAVE_PATH`: save file (default: "savegame.json")
//! - `RUST_LOG`: log filter (default: "info")

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use merge2048::core::{GameConfig, GameState};
use merge2048::store::{SnapshotStore, StoreConfig};
use merge2048::types::Direction;

const DEFAULT_MAX_MOVES: u32 = 2000;

/// Directions tried in order; the first one that changes the grid is played.
const PREFERENCE: [Direction; 4] = [
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Up,
];

#[derive(Debug, Clone, Copy)]
struct RunConfig {
    seed: u64,
    max_moves: u32,
}

impl RunConfig {
    fn from_env() -> Self {
        use std::env;

        let seed = env::var("MERGE2048_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let max_moves = env::var("MERGE2048_MAX_MOVES")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_MOVES);

        Self { seed, max_moves }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let run = RunConfig::from_env();
    let config = GameConfig::from_env().context("invalid game configuration")?;
    let store = SnapshotStore::new(StoreConfig::from_env());
    info!(
        "seed {}, {}x{} grid, target {}, budget {} moves",
        run.seed, config.size, config.size, config.target, run.max_moves
    );

    let mut game = store.resume(config, run.seed);
    if game.status().is_terminal() {
        info!("saved game is already over; starting a new one");
        game.new_game();
    }

    let played = play(&mut game, run.max_moves);

    game.ratchet_best_score();
    store
        .save(&game.snapshot())
        .with_context(|| format!("failed to save game to {}", store.path().display()))?;

    println!("{}", game.grid());
    println!(
        "score {}  best {}  max tile {}  moves {}  status {}",
        game.score(),
        game.best_score(),
        game.max_tile(),
        played,
        game.status()
    );
    Ok(())
}

/// First direction in [`PREFERENCE`] order that changes the grid.
fn choose_direction(game: &GameState) -> Option<Direction> {
    PREFERENCE
        .into_iter()
        .find(|&dir| game.check_move_valid(dir))
}

/// Play until the game is lost or `budget` moves were made.
fn play(game: &mut GameState, budget: u32) -> u32 {
    let mut played = 0;
    while played < budget {
        let Some(dir) = choose_direction(game) else {
            break;
        };
        game.apply_move(dir);
        played += 1;
    }
    played
}
