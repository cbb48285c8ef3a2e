//! Line reduction - slide one line toward its head and merge pairs
//!
//! A single pass over the non-empty tiles, compacting toward index 0. A tile
//! that equals the last tile written doubles it in place; the doubled slot
//! is then spent and cannot absorb a third tile. `[2, 2, 2, 0]` therefore
//! reduces to `[4, 2, 0, 0]`, never `[8, 0, 0, 0]`.
//!
//! Two tiles whose sum does not fit in a [`Tile`] stay side by side.

use crate::grid::Line;
use crate::types::{Tile, EMPTY};

/// Reduce `line`, returning the compacted line and the points scored.
///
/// Points are the sum of the merged (doubled) values.
///
/// # Panics
///
/// Panics if `line` is longer than [`MAX_GRID_SIZE`](crate::types::MAX_GRID_SIZE).
///
/// # Examples
///
/// ```
/// use merge2048_core::reduce;
///
/// let (line, points) = reduce(&[2, 2, 2, 2]);
/// assert_eq!(line.as_slice(), &[4, 4, 0, 0]);
/// assert_eq!(points, 8);
///
/// let (line, points) = reduce(&[2, 0, 2, 4]);
/// assert_eq!(line.as_slice(), &[4, 4, 0, 0]);
/// assert_eq!(points, 4);
/// ```
pub fn reduce(line: &[Tile]) -> (Line, u32) {
    let mut out = Line::new();
    let mut points: u32 = 0;
    // Value of the last unmerged slot; None once that slot has merged.
    let mut last: Option<Tile> = None;

    for &tile in line.iter().filter(|&&t| t != EMPTY) {
        let merged = if last == Some(tile) {
            tile.checked_mul(2)
        } else {
            None
        };
        if let (Some(value), Some(slot)) = (merged, out.len().checked_sub(1)) {
            out[slot] = value;
            points = points.saturating_add(value);
            last = None;
        } else {
            out.push(tile);
            last = Some(tile);
        }
    }

    while out.len() < line.len() {
        out.push(EMPTY);
    }

    (out, points)
}
