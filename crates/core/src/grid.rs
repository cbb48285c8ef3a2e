//! Grid module - the square tile matrix
//!
//! The grid is an NxN matrix where each cell is empty (`0`) or holds a power of
//! two. Uses a flat row-major buffer for cache locality.
//! Coordinates: (row, col) where row ranges 0..N (top to bottom), col ranges
//! 0..N (left to right).
//!
//! Every constructor validates shape and values, so a `Grid` that exists
//! always satisfies the tile invariant.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::types::{
    is_cell_value, Direction, Tile, DEFAULT_GRID_SIZE, EMPTY, MAX_GRID_SIZE, MIN_GRID_SIZE,
};

/// A row or column read in the direction of travel.
pub type Line = ArrayVec<Tile, MAX_GRID_SIZE>;

/// Flat cell indices of one line, in the order tiles travel.
pub type LineIndices = ArrayVec<usize, MAX_GRID_SIZE>;

/// The game grid - N columns x N rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Tile>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(size: usize) -> Result<Self, GridError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(GridError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![EMPTY; size * size],
        })
    }

    /// Build a grid from row slices.
    ///
    /// ```
    /// use merge2048_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(grid.get(1, 1), Some(4));
    ///
    /// assert!(Grid::from_rows(&[[2, 3], [0, 0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        let mut grid = Self::new(size)?;
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size {
                return Err(GridError::RaggedRow {
                    row,
                    len: cells.len(),
                    size,
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                grid.set(row, col, value)?;
            }
        }
        Ok(grid)
    }

    /// Build a grid from a flat row-major buffer of `size * size` cells.
    pub fn from_flat(size: usize, cells: Vec<Tile>) -> Result<Self, GridError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(GridError::InvalidSize(size));
        }
        if cells.len() != size * size {
            return Err(GridError::CellCount {
                expected: size * size,
                actual: cells.len(),
            });
        }
        if let Some(idx) = cells.iter().position(|&v| !is_cell_value(v)) {
            return Err(GridError::InvalidTile {
                row: idx / size,
                col: idx % size,
                value: cells[idx],
            });
        }
        Ok(Self { size, cells })
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Edge length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col), rejecting out-of-bounds positions and
    /// values that are neither empty nor a tile.
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> Result<(), GridError> {
        let Some(idx) = self.index(row, col) else {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        };
        if !is_cell_value(value) {
            return Err(GridError::InvalidTile { row, col, value });
        }
        self.cells[idx] = value;
        Ok(())
    }

    /// Row-major cells
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Tile] {
        &mut self.cells
    }

    /// (row, col) of a flat index
    pub fn position(&self, idx: usize) -> (usize, usize) {
        (idx / self.size, idx % self.size)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Flat indices of empty cells, in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == EMPTY)
            .map(|(idx, _)| idx)
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY).count()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.contains(&EMPTY)
    }

    pub fn contains(&self, value: Tile) -> bool {
        self.cells.contains(&value)
    }

    /// Largest tile on the grid (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of all tiles
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Cell indices of line `k` for `direction`, ordered the way tiles move.
    ///
    /// - Left: row `k`, left to right
    /// - Right: row `k`, right to left
    /// - Up: column `k`, top to bottom
    /// - Down: column `k`, bottom to top
    ///
    /// Writing a reduced line back through the same indices undoes the
    /// reversal for Right/Down.
    pub fn line_indices(&self, direction: Direction, k: usize) -> LineIndices {
        let n = self.size;
        match direction {
            Direction::Left => (0..n).map(|j| k * n + j).collect(),
            Direction::Right => (0..n).rev().map(|j| k * n + j).collect(),
            Direction::Up => (0..n).map(|j| j * n + k).collect(),
            Direction::Down => (0..n).rev().map(|j| j * n + k).collect(),
        }
    }

    /// Copy with every row reversed (left-right mirror)
    pub fn mirrored(&self) -> Self {
        let mut out = self.clone();
        for row in out.cells.chunks_mut(self.size) {
            row.reverse();
        }
        out
    }

    /// Copy with rows and columns swapped
    pub fn transposed(&self) -> Self {
        let n = self.size;
        let mut out = self.clone();
        for row in 0..n {
            for col in 0..n {
                out.cells[col * n + row] = self.cells[row * n + col];
            }
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            cells: vec![EMPTY; DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE],
        }
    }
}

/// Plain-text view: right-aligned columns, `.` for empty cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                if value == EMPTY {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{:>width$}", value)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::default();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 3), Some(3));
        assert_eq!(grid.index(1, 0), Some(4));
        assert_eq!(grid.index(3, 3), Some(15));
        assert_eq!(grid.index(4, 0), None);
        assert_eq!(grid.index(0, 4), None);
    }

    #[test]
    fn test_grid_size_bounds() {
        assert_eq!(Grid::new(1), Err(GridError::InvalidSize(1)));
        assert_eq!(Grid::new(17), Err(GridError::InvalidSize(17)));
        assert_eq!(Grid::new(2).unwrap().cells().len(), 4);
        assert_eq!(Grid::new(16).unwrap().cells().len(), 256);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows: Vec<Vec<Tile>> = vec![vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::RaggedRow {
                row: 1,
                len: 2,
                size: 3
            })
        );
    }

    #[test]
    fn test_from_flat_rejects_bad_values() {
        assert_eq!(
            Grid::from_flat(2, vec![0, 2, 4]),
            Err(GridError::CellCount {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Grid::from_flat(2, vec![0, 2, 4, 1]),
            Err(GridError::InvalidTile {
                row: 1,
                col: 1,
                value: 1
            })
        );
    }

    #[test]
    fn test_line_indices_follow_travel_order() {
        let grid = Grid::default();
        assert_eq!(grid.line_indices(Direction::Left, 1).as_slice(), &[4, 5, 6, 7]);
        assert_eq!(grid.line_indices(Direction::Right, 1).as_slice(), &[7, 6, 5, 4]);
        assert_eq!(grid.line_indices(Direction::Up, 2).as_slice(), &[2, 6, 10, 14]);
        assert_eq!(grid.line_indices(Direction::Down, 2).as_slice(), &[14, 10, 6, 2]);
    }

    #[test]
    fn test_mirror_and_transpose() {
        let grid = Grid::from_rows(&[[2, 4, 0], [0, 8, 0], [16, 0, 2]]).unwrap();
        assert_eq!(
            grid.mirrored().to_rows(),
            vec![vec![0, 4, 2], vec![0, 8, 0], vec![2, 0, 16]]
        );
        assert_eq!(
            grid.transposed().to_rows(),
            vec![vec![2, 0, 16], vec![4, 8, 0], vec![0, 0, 2]]
        );
        assert_eq!(grid.transposed().transposed(), grid);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(&[[2, 0], [128, 4]]).unwrap();
        assert_eq!(grid.to_string(), "  2   .\n128   4");
    }
}
