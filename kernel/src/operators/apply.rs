//! `apply()` and `successors()`: blank moves on an immutable [`Grid`].
//!
//! Both entry points return new grids; the input is never mutated.

use thiserror::Error;

use crate::carrier::grid::Grid;
use crate::error::KernelError;
use crate::operators::action::Action;

/// Typed failure for a single move. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyFailure {
    /// The blank sits on the edge the move would cross.
    #[error("{action} would move the blank off a {side}x{side} board")]
    OutOfBounds { action: Action, side: usize },
    /// The board itself is malformed.
    #[error(transparent)]
    Kernel(#[from] KernelError),
}

/// Apply one blank move.
///
/// # Errors
///
/// - [`ApplyFailure::OutOfBounds`] if the blank is on the edge in `action`'s direction.
/// - [`ApplyFailure::Kernel`] if the board has no blank.
pub fn apply(grid: &Grid, action: Action) -> Result<Grid, ApplyFailure> {
    let blank = grid.blank_position()?;
    let target = neighbour(blank, action, grid.side()).ok_or(ApplyFailure::OutOfBounds {
        action,
        side: grid.side(),
    })?;
    Ok(grid.with_swapped(blank, target))
}

/// Legal one-step successors in [`Action::EXPANSION_ORDER`].
///
/// A direction is skipped when the blank already sits on that edge, so a
/// board yields 2 (corner), 3 (edge) or 4 (interior) successors.
///
/// # Errors
///
/// Returns [`KernelError::InvariantViolation`] if the board has no blank.
pub fn successors(grid: &Grid) -> Result<Vec<(Action, Grid)>, KernelError> {
    let blank = grid.blank_position()?;
    Ok(Action::EXPANSION_ORDER
        .iter()
        .filter_map(|&action| {
            neighbour(blank, action, grid.side()).map(|target| (action, grid.with_swapped(blank, target)))
        })
        .collect())
}

/// Cell the blank lands on, or `None` if it would leave the board.
fn neighbour((row, col): (usize, usize), action: Action, side: usize) -> Option<(usize, usize)> {
    let (dr, dc) = action.offset();
    let row = row.checked_add_signed(dr).filter(|&r| r < side)?;
    let col = col.checked_add_signed(dc).filter(|&c| c < side)?;
    Some((row, col))
}
