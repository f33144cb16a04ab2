//! Typed kernel errors.
//!
//! Every variant is an input-validation failure. None of them is retried or
//! recovered from; callers abort the run that produced them.

use thiserror::Error;

/// Failure to build or inspect a [`crate::Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// A token is not a parseable non-negative tile value.
    #[error("token {token:?} is not a valid tile value")]
    Format { token: String },
    /// The tile count is not a perfect square with side of at least 2.
    #[error("{tiles} tiles do not form a square board of side >= 2")]
    Shape { tiles: usize },
    /// A board that must hold exactly one blank holds none.
    #[error("invariant violated: {detail}")]
    InvariantViolation { detail: String },
}
