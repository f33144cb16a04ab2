//! What a run reports: why it stopped, its counters, and the solution steps.

use std::time::Duration;

use npuzzle_kernel::{Action, Grid};
use serde::Serialize;

use crate::node::SearchNode;

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TerminationReason {
    /// A node matching the goal fingerprint was popped.
    GoalReached { depth: u32 },
    /// Frontier emptied without finding the goal.
    FrontierExhausted,
    /// `max_expansions` ceiling was hit.
    ExpansionBudgetExceeded { limit: u64 },
    /// `time_limit` ceiling was hit.
    TimeBudgetExceeded { limit_ms: u64 },
}

impl TerminationReason {
    /// Short machine-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded { .. } => "expansion_budget_exceeded",
            Self::TimeBudgetExceeded { .. } => "time_budget_exceeded",
        }
    }
}

/// Counters collected during a run, reported whatever the outcome.
///
/// Everything except `elapsed` is deterministic for a fixed input and policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Distinct expanded fingerprints. The goal node is never expanded.
    pub visited_count: u64,
    /// Sum of node footprints over expanded nodes plus the goal node.
    pub memory_bytes: u64,
    /// Nodes expanded.
    pub expansions: u64,
    /// Nodes created, root included.
    pub nodes_generated: u64,
    /// Successors skipped because their board was already expanded.
    pub duplicates_suppressed: u64,
    /// Pops dropped because their board was expanded by an earlier pop.
    pub stale_pops: u64,
    /// Largest number of pending nodes at any time.
    pub frontier_high_water: u64,
    /// Wall-clock duration of the run.
    #[serde(skip)]
    pub elapsed: Duration,
}

/// One step of a reconstructed solution, root first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionStep {
    /// Move that led here (`None` for the root).
    pub action: Option<Action>,
    pub grid: Grid,
    pub depth: u32,
    /// A* only.
    pub heuristic: Option<u32>,
    /// A* only.
    pub cost: Option<u32>,
    /// A* only, when snapshots are recorded.
    pub frontier_snapshot: Option<String>,
}

impl From<&SearchNode> for SolutionStep {
    fn from(node: &SearchNode) -> Self {
        Self {
            action: node.action,
            grid: node.grid.clone(),
            depth: node.depth,
            heuristic: node.heuristic,
            cost: node.cost,
            frontier_snapshot: node.frontier_snapshot.clone(),
        }
    }
}
