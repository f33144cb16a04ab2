//! Harness runner: validates inputs, runs one search, builds the report.
//!
//! # Pipeline
//!
//! ```text
//! search_policy() → parse(start) → parse(goal) → blank checks
//!   → preflight() → is_solvable_pair() (logged only) → search() → SolveReport
//! ```
//!
//! Every failure before `search()` aborts the run. A search that exhausts
//! its frontier or hits a ceiling is still a successful `solve` call whose
//! report says `success = false`.

use std::fmt;

use npuzzle_kernel::carrier::parity::is_solvable_pair;
use npuzzle_kernel::{Grid, KernelError};
use npuzzle_search::{preflight, search, SearchError};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{ConfigError, SolverConfig};
use crate::report::SolveReport;

/// Which input a parse failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    Start,
    Goal,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Goal => "goal",
        })
    }
}

/// Error during a harness run.
#[derive(Debug, Error)]
pub enum RunError {
    /// A board string is malformed or has no blank.
    #[error("invalid {role} board: {source}")]
    Parse {
        role: InputRole,
        #[source]
        source: KernelError,
    },
    /// Search pre-flight failed.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// Configuration could not be turned into a policy.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Report serialization failed.
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn parse_board(text: &str, separator: &str, role: InputRole) -> Result<Grid, RunError> {
    let grid = Grid::parse(text, separator).map_err(|source| RunError::Parse { role, source })?;
    grid.blank_position()
        .map_err(|source| RunError::Parse { role, source })?;
    Ok(grid)
}

/// Solve `start` → `goal` under `config`.
///
/// # Errors
///
/// - [`RunError::Config`] if the config does not validate.
/// - [`RunError::Parse`] if either board is malformed or has no blank.
/// - [`RunError::Search`] for the remaining pre-flight failures
///   (e.g. boards of different sides).
pub fn solve(start: &str, goal: &str, config: &SolverConfig) -> Result<SolveReport, RunError> {
    let policy = config.search_policy()?;
    let start_grid = parse_board(start, &policy.separator, InputRole::Start)?;
    let goal_grid = parse_board(goal, &policy.separator, InputRole::Goal)?;
    preflight(&start_grid, &goal_grid, &policy)?;

    let solvable_parity =
        is_solvable_pair(&start_grid, &goal_grid).map_err(SearchError::from)?;
    if solvable_parity {
        info!(event = "parity_check", solvable = true);
    } else {
        warn!(
            event = "parity_check",
            solvable = false,
            "start and goal are in different parity classes; expect exhaustion"
        );
    }

    let start_fp = start_grid.fingerprint(&policy.separator);
    let goal_fp = goal_grid.fingerprint(&policy.separator);
    let result = search(start_grid, &goal_grid, &policy)?;
    Ok(SolveReport::from_result(
        &result,
        start_fp,
        goal_fp,
        &policy.separator,
        solvable_parity,
    ))
}
