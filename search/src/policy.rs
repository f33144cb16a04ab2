//! Search policy types.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use npuzzle_kernel::{BlankPolicy, DEFAULT_SEPARATOR};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::error::SearchError;

/// Traversal strategy.
///
/// Parses case-insensitively from `bfs`/`breadth_first`, `dfs`/`depth_first`
/// and `astar`/`a_star`/`a*`. Serializes and displays as the short name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Strategy {
    /// FIFO frontier; shortest path in moves.
    BreadthFirst,
    /// LIFO frontier; any path, often very long.
    DepthFirst,
    /// Min-heap on `depth + heuristic`.
    #[default]
    AStar,
}

impl Strategy {
    /// All strategies, in a fixed order.
    pub const ALL: [Self; 3] = [Self::BreadthFirst, Self::DepthFirst, Self::AStar];

    /// Canonical short name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::AStar => "astar",
        }
    }

    /// Whether nodes carry heuristic and cost fields.
    #[must_use]
    pub const fn is_informed(self) -> bool {
        matches!(self, Self::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Strategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// An unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?} (expected bfs, dfs or astar)")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth_first" => Ok(Self::BreadthFirst),
            "dfs" | "depth_first" => Ok(Self::DepthFirst),
            "astar" | "a_star" | "a*" => Ok(Self::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = ParseStrategyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Strategy plus the knobs a single run needs.
///
/// Both ceilings default to `None` (unbounded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Traversal strategy.
    pub strategy: Strategy,
    /// Separator used for fingerprints.
    pub separator: String,
    /// Hard cap on node expansions.
    pub max_expansions: Option<u64>,
    /// Wall-clock ceiling, checked before every pop.
    pub time_limit: Option<Duration>,
    /// Record `[F(x)=..]` frontier snapshots on popped A* nodes. Off by
    /// default: every expanded node keeps its snapshot, so memory grows with
    /// expansions times frontier size.
    pub record_frontier_snapshots: bool,
    /// Whether the blank counts toward the Manhattan sum.
    pub blank_policy: BlankPolicy,
}

impl SearchPolicy {
    /// Default policy with the given strategy.
    #[must_use]
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Validate that this policy can drive a run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if a ceiling is zero or the
    /// separator is empty or contains a digit (fingerprints would no longer
    /// be injective).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1 when set".into(),
            });
        }
        if self.time_limit == Some(Duration::ZERO) {
            return Err(SearchError::InvalidPolicy {
                detail: "time_limit must be non-zero when set".into(),
            });
        }
        if self.separator.is_empty() {
            return Err(SearchError::InvalidPolicy {
                detail: "separator must not be empty".into(),
            });
        }
        if self.separator.chars().any(|c| c.is_ascii_digit()) {
            return Err(SearchError::InvalidPolicy {
                detail: format!("separator {:?} must not contain digits", self.separator),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            strategy: Strategy::AStar,
            separator: DEFAULT_SEPARATOR.to_string(),
            max_expansions: None,
            time_limit: None,
            record_frontier_snapshots: false,
            blank_policy: BlankPolicy::Counted,
        }
    }
}
