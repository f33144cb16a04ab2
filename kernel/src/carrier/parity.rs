//! Solvability parity for sliding-tile boards.
//!
//! Two boards over the same tiles are mutually reachable iff they share a
//! parity class. For odd N the class is the inversion parity. For even N a
//! vertical move shifts a tile past N-1 others, so the class is the parity of
//! inversions plus the blank's row.

use crate::carrier::grid::{Grid, BLANK};
use crate::error::KernelError;

/// Number of ordered pairs of non-blank tiles that appear out of order.
#[must_use]
pub fn inversion_count(grid: &Grid) -> usize {
    let tiles: Vec<_> = grid.cells().iter().copied().filter(|&t| t != BLANK).collect();
    tiles
        .iter()
        .enumerate()
        .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&later| later < tile).count())
        .sum()
}

/// Parity class of a board: `true` for odd, `false` for even.
///
/// # Errors
///
/// Returns [`KernelError::InvariantViolation`] if the board has no blank.
pub fn parity_class(grid: &Grid) -> Result<bool, KernelError> {
    let inversions = inversion_count(grid);
    if grid.side() % 2 == 1 {
        return Ok(inversions % 2 == 1);
    }
    let (blank_row, _) = grid.blank_position()?;
    Ok((inversions + blank_row) % 2 == 1)
}

/// Whether `goal` is reachable from `start` by blank moves.
///
/// Assumes both boards carry the same tile multiset; boards of different
/// sides are never mutually reachable.
///
/// # Errors
///
/// Returns [`KernelError::InvariantViolation`] if either board has no blank.
pub fn is_solvable_pair(start: &Grid, goal: &Grid) -> Result<bool, KernelError> {
    if start.side() != goal.side() {
        return Ok(false);
    }
    Ok(parity_class(start)? == parity_class(goal)?)
}
