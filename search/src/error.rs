//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Running out of frontier
//! or hitting a ceiling is a terminal outcome, expressed via
//! [`crate::outcome::TerminationReason`] with full statistics.

use npuzzle_kernel::KernelError;
use thiserror::Error;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before the first node is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The policy carries a value the engine cannot run with.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// Start and goal boards have different sides.
    #[error("start board is {start}x{start} but goal board is {goal}x{goal}")]
    DimensionMismatch { start: usize, goal: usize },
    /// A board failed a kernel invariant (missing blank).
    #[error(transparent)]
    Kernel(#[from] KernelError),
}
