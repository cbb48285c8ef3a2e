//! Grid transformation - apply one direction to a whole grid
//!
//! Every direction runs through the same path: read each line in the order
//! tiles travel, reduce it, write it back through the same indices. Lines do
//! not interact, so the result depends only on the grid and the direction.

use arrayvec::ArrayVec;

use crate::grid::{Grid, Line};
use crate::reducer::reduce;
use crate::types::{Direction, Tile};

/// Outcome of sliding a grid in one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    /// Sum of the merged tile values
    pub points: u32,
    /// Whether `grid` differs from the input
    pub changed: bool,
}

/// Slide and merge every line of `grid` toward `direction`.
///
/// ```
/// use merge2048_core::{transform, Grid};
/// use merge2048_core::types::Direction;
///
/// let grid = Grid::from_rows(&[[2, 2], [0, 4]]).unwrap();
/// let result = transform(&grid, Direction::Left);
/// assert_eq!(result.grid.to_rows(), vec![vec![4, 0], vec![4, 0]]);
/// assert_eq!(result.points, 4);
/// assert!(result.changed);
/// ```
pub fn transform(grid: &Grid, direction: Direction) -> MoveResult {
    let mut next = grid.clone();
    let mut points: u32 = 0;

    for k in 0..grid.size() {
        let indices = grid.line_indices(direction, k);
        let line: Line = indices.iter().map(|&idx| grid.cells()[idx]).collect();
        let (reduced, gained) = reduce(&line);

        let cells = next.cells_mut();
        for (&idx, &tile) in indices.iter().zip(reduced.iter()) {
            cells[idx] = tile;
        }
        points = points.saturating_add(gained);
    }

    let changed = next != *grid;
    MoveResult {
        grid: next,
        points,
        changed,
    }
}

/// True when sliding toward `direction` would change the grid.
///
/// Probing never touches a score, so callers can check validity freely.
pub fn check_move_valid(grid: &Grid, direction: Direction) -> bool {
    transform(grid, direction).changed
}

/// Directions that change the grid, in [`Direction::ALL`] order
pub fn valid_moves(grid: &Grid) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| check_move_valid(grid, dir))
        .collect()
}

pub fn has_valid_move(grid: &Grid) -> bool {
    Direction::ALL
        .into_iter()
        .any(|dir| check_move_valid(grid, dir))
}

/// Terminal check: no empty cell and no direction changes the grid.
pub fn is_lost(grid: &Grid) -> bool {
    !grid.has_empty() && !has_valid_move(grid)
}

/// True while some cell holds exactly `target`.
pub fn reached_target(grid: &Grid, target: Tile) -> bool {
    grid.contains(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[[Tile; 4]; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_transform_each_direction() {
        let g = grid(&[[2, 0, 2, 0], [0, 4, 0, 4], [8, 0, 0, 8], [2, 4, 8, 16]]);

        let left = transform(&g, Direction::Left);
        assert_eq!(
            left.grid,
            grid(&[[4, 0, 0, 0], [8, 0, 0, 0], [16, 0, 0, 0], [2, 4, 8, 16]])
        );
        assert_eq!(left.points, 28);

        let right = transform(&g, Direction::Right);
        assert_eq!(
            right.grid,
            grid(&[[0, 0, 0, 4], [0, 0, 0, 8], [0, 0, 0, 16], [2, 4, 8, 16]])
        );
        assert_eq!(right.points, 28);

        let up = transform(&g, Direction::Up);
        assert_eq!(
            up.grid,
            grid(&[[2, 8, 2, 4], [8, 0, 8, 8], [2, 0, 0, 16], [0, 0, 0, 0]])
        );
        assert_eq!(up.points, 8);

        let down = transform(&g, Direction::Down);
        assert_eq!(
            down.grid,
            grid(&[[0, 0, 0, 0], [2, 0, 0, 4], [8, 0, 2, 8], [2, 8, 8, 16]])
        );
        assert_eq!(down.points, 8);
    }

    #[test]
    fn test_transform_leaves_input_untouched() {
        let g = grid(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let before = g.clone();
        let _ = transform(&g, Direction::Left);
        assert_eq!(g, before);
    }

    #[test]
    fn test_unchanged_grid_is_not_valid() {
        let g = grid(&[[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
        let result = transform(&g, Direction::Left);
        assert!(!result.changed);
        assert_eq!(result.points, 0);
        assert!(!check_move_valid(&g, Direction::Left));
        assert!(!check_move_valid(&g, Direction::Up));
        assert!(check_move_valid(&g, Direction::Right));
        assert!(check_move_valid(&g, Direction::Down));
        assert_eq!(
            valid_moves(&g).as_slice(),
            &[Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn test_full_grid_with_merge_is_not_lost() {
        let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 4]]);
        assert!(!g.has_empty());
        assert!(!is_lost(&g));
        assert!(check_move_valid(&g, Direction::Left));
    }

    #[test]
    fn test_checkerboard_is_lost() {
        let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(is_lost(&g));
        assert!(valid_moves(&g).is_empty());
    }

    #[test]
    fn test_empty_cell_is_never_lost() {
        let g = grid(&[[0, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!is_lost(&g));
    }

    #[test]
    fn test_reached_target() {
        let mut g = Grid::default();
        assert!(!reached_target(&g, 2048));
        g.set(2, 1, 1024).unwrap();
        assert!(!reached_target(&g, 2048));
        g.set(0, 0, 2048).unwrap();
        assert!(reached_target(&g, 2048));
    }

    #[test]
    fn test_tile_above_target_is_not_target() {
        let mut g = Grid::default();
        g.set(0, 0, 4096).unwrap();
        assert!(!reached_target(&g, 2048));
        g.set(3, 3, 2048).unwrap();
        assert!(reached_target(&g, 2048));
    }

    #[test]
    fn test_largest_tiles_block_instead_of_overflowing() {
        let top: Tile = 1 << 31;
        let g = Grid::from_rows(&[[top, top], [0, 0]]).unwrap();
        let result = transform(&g, Direction::Left);
        assert!(!result.changed);
        assert_eq!(result.points, 0);
        assert_eq!(result.grid.total(), g.total());
        assert!(check_move_valid(&g, Direction::Down));
    }
}
