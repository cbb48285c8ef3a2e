//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, making them usable
//! in any context (engine, persistence, a host UI).
//!
//! # Grid Dimensions
//!
//! - **Default size**: 4x4 cells
//! - **Supported sizes**: 2x2 up to 16x16 (lines are stack-allocated)
//!
//! # Tile Values
//!
//! A cell holds `0` (empty) or a power of two `>= 2`. New tiles are drawn
//! from [`SPAWN_VALUES`] with [`SPAWN_WEIGHTS`]:
//!
//! | Value | Weight | Probability |
//! |-------|--------|-------------|
//! | 2 | 15 | 15/16 |
//! | 4 | 1 | 1/16 |
//!
//! # Examples
//!
//! ```
//! use merge2048_types::{is_tile_value, Direction, DEFAULT_GRID_SIZE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.to_string(), "left");
//!
//! assert!(is_tile_value(2048));
//! assert!(!is_tile_value(3));
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

use std::fmt;

/// A cell value. `0` is empty.
pub type Tile = u32;

/// Empty cell marker
pub const EMPTY: Tile = 0;

/// Canonical grid edge length (4x4)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest supported grid edge length
pub const MIN_GRID_SIZE: usize = 2;

/// Largest supported grid edge length (capacity of a line buffer)
pub const MAX_GRID_SIZE: usize = 16;

/// Tile value that marks a game as won
pub const DEFAULT_TARGET: Tile = 2048;

/// Values a spawned tile can take
pub const SPAWN_VALUES: [Tile; 2] = [2, 4];

/// Relative weights for [`SPAWN_VALUES`]
pub const SPAWN_WEIGHTS: [u32; 2] = [15, 1];

/// Number of tiles placed when a game starts
pub const INITIAL_TILES: usize = 2;

/// Returns true for values a non-empty cell may hold (powers of two >= 2).
///
/// ```
/// use merge2048_types::is_tile_value;
///
/// assert!(is_tile_value(2));
/// assert!(is_tile_value(65536));
/// assert!(!is_tile_value(0));
/// assert!(!is_tile_value(1));
/// assert!(!is_tile_value(6));
/// ```
pub const fn is_tile_value(value: Tile) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// Returns true for values any cell may hold, including empty.
pub const fn is_cell_value(value: Tile) -> bool {
    value == EMPTY || is_tile_value(value)
}

/// Direction tiles slide in
///
/// Purely a selector of traversal order; never stored in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order move probes are reported.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use merge2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("diagonal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a game
///
/// - **Playing**: moves are possible and the target has not been reached
/// - **Won**: some tile reached the target; play may continue
/// - **Lost**: no direction changes the grid (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Combine the independent won/lost flags. Lost wins the tie.
    pub fn from_flags(won: bool, lost: bool) -> Self {
        if lost {
            GameStatus::Lost
        } else if won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert_eq!(DEFAULT_GRID_SIZE, 4);
        assert_eq!(DEFAULT_TARGET, 2048);
        assert_eq!(SPAWN_VALUES, [2, 4]);
        assert_eq!(SPAWN_WEIGHTS, [15, 1]);
        assert_eq!(INITIAL_TILES, 2);
        assert!(MIN_GRID_SIZE <= DEFAULT_GRID_SIZE && DEFAULT_GRID_SIZE <= MAX_GRID_SIZE);
    }

    #[test]
    fn test_direction_roundtrip_names() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn test_cell_values() {
        assert!(is_cell_value(0));
        assert!(is_cell_value(4));
        assert!(!is_cell_value(1));
        assert!(!is_cell_value(12));
        assert!(is_tile_value(1 << 31));
    }

    #[test]
    fn test_status_from_flags() {
        assert_eq!(GameStatus::from_flags(false, false), GameStatus::Playing);
        assert_eq!(GameStatus::from_flags(true, false), GameStatus::Won);
        assert_eq!(GameStatus::from_flags(false, true), GameStatus::Lost);
        assert_eq!(GameStatus::from_flags(true, true), GameStatus::Lost);
        assert!(GameStatus::Lost.is_terminal());
        assert!(!GameStatus::Won.is_terminal());
    }
}
