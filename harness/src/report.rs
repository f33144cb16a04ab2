//! Solve report: the record handed back to callers.
//!
//! The report is a plain serde value. Two digests are derived from it:
//!
//! - [`SolveReport::trace_digest`] covers every deterministic field (all of
//!   them except wall-clock time), so two runs over the same input and
//!   config must agree on it, in-process or across processes.
//! - [`SolveReport::path_digest`] covers only the action sequence.

use npuzzle_kernel::proof::hash::{
    canonical_hash, ContentHash, DOMAIN_SOLUTION_PATH, DOMAIN_SOLVE_REPORT,
};
use npuzzle_kernel::Action;
use npuzzle_search::{SearchResult, SearchStats, SolutionStep, Strategy, TerminationReason};
use serde::Serialize;

/// One solution step with the board rendered as its fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportStep {
    pub action: Option<Action>,
    pub board: String,
    pub depth: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontier_snapshot: Option<String>,
}

impl ReportStep {
    fn from_step(step: SolutionStep, separator: &str) -> Self {
        Self {
            action: step.action,
            board: step.grid.fingerprint(separator),
            depth: step.depth,
            heuristic: step.heuristic,
            cost: step.cost,
            frontier_snapshot: step.frontier_snapshot,
        }
    }
}

/// Outcome of one `solve` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub strategy: Strategy,
    /// Start board fingerprint.
    pub start: String,
    /// Goal board fingerprint.
    pub goal: String,
    pub success: bool,
    pub termination: TerminationReason,
    /// Whether start and goal share a parity class. Diagnostic only.
    pub solvable_parity: bool,
    /// Root-first steps; `None` unless the goal was reached.
    pub steps: Option<Vec<ReportStep>>,
    pub stats: SearchStats,
    /// Wall-clock duration. Excluded from [`SolveReport::trace_digest`].
    pub elapsed_ms: u64,
}

/// Everything in a report except wall-clock time.
#[derive(Serialize)]
struct DigestBasis<'a> {
    strategy: Strategy,
    start: &'a str,
    goal: &'a str,
    success: bool,
    termination: TerminationReason,
    solvable_parity: bool,
    steps: Option<&'a [ReportStep]>,
    stats: &'a SearchStats,
}

impl SolveReport {
    /// Build a report from a finished search.
    #[must_use]
    pub fn from_result(
        result: &SearchResult,
        start: String,
        goal: String,
        separator: &str,
        solvable_parity: bool,
    ) -> Self {
        let steps = result.steps().map(|steps| {
            steps
                .into_iter()
                .map(|s| ReportStep::from_step(s, separator))
                .collect()
        });
        Self {
            strategy: result.strategy,
            start,
            goal,
            success: result.is_goal_reached(),
            termination: result.termination,
            solvable_parity,
            steps,
            stats: result.stats.clone(),
            elapsed_ms: u64::try_from(result.stats.elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Number of moves in the solution, if any.
    #[must_use]
    pub fn depth(&self) -> Option<usize> {
        self.steps.as_ref().map(|s| s.len().saturating_sub(1))
    }

    /// Moves from start to goal, if the goal was reached.
    #[must_use]
    pub fn actions(&self) -> Option<Vec<Action>> {
        self.steps
            .as_ref()
            .map(|steps| steps.iter().filter_map(|s| s.action).collect())
    }

    /// Serialize the report as compact JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Digest of every deterministic field.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures.
    pub fn trace_digest(&self) -> Result<ContentHash, serde_json::Error> {
        let basis = DigestBasis {
            strategy: self.strategy,
            start: &self.start,
            goal: &self.goal,
            success: self.success,
            termination: self.termination,
            solvable_parity: self.solvable_parity,
            steps: self.steps.as_deref(),
            stats: &self.stats,
        };
        let bytes = serde_json::to_vec(&basis)?;
        Ok(canonical_hash(DOMAIN_SOLVE_REPORT, &bytes))
    }

    /// Digest of the action sequence (`UP,LEFT,...`), if the goal was reached.
    #[must_use]
    pub fn path_digest(&self) -> Option<ContentHash> {
        let actions = self.actions()?;
        let joined = actions
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(",");
        Some(canonical_hash(DOMAIN_SOLUTION_PATH, joined.as_bytes()))
    }
}
