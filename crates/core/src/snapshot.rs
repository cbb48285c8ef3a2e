use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::Grid;
use crate::types::{Tile, DEFAULT_GRID_SIZE, EMPTY};

/// Persistable view of a game: scores plus the flattened grid.
///
/// Nothing here is trusted on the way in; [`GameSnapshot::to_grid`] validates
/// the cells before a game is rebuilt from them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub score: u32,
    pub best_score: u32,
    /// Grid edge length
    pub size: usize,
    /// Row-major cells, `size * size` long
    pub grid: Vec<Tile>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.score = 0;
        self.best_score = 0;
        self.size = DEFAULT_GRID_SIZE;
        self.grid.clear();
        self.grid.resize(DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE, EMPTY);
    }

    /// Rebuild the grid, checking shape and tile values.
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        Grid::from_flat(self.size, self.grid.clone())
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            score: 0,
            best_score: 0,
            size: DEFAULT_GRID_SIZE,
            grid: Vec::with_capacity(DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE),
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_empty_4x4() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.size, 4);
        assert_eq!(snap.grid, vec![0; 16]);
        assert_eq!(snap.to_grid(), Ok(Grid::default()));
    }

    #[test]
    fn test_json_shape() {
        let snap = GameSnapshot {
            score: 12,
            best_score: 40,
            size: 2,
            grid: vec![2, 0, 0, 8],
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert_eq!(json, r#"{"score":12,"best_score":40,"size":2,"grid":[2,0,0,8]}"#);
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn test_to_grid_catches_corrupt_grid() {
        let mut snap = GameSnapshot::default();
        snap.grid[5] = 7;
        assert_eq!(
            snap.to_grid(),
            Err(GridError::InvalidTile {
                row: 1,
                col: 1,
                value: 7
            })
        );

        snap.grid.pop();
        assert!(matches!(snap.to_grid(), Err(GridError::CellCount { .. })));
    }
}
