//! Shared fixtures for npuzzle benchmark suites.

use npuzzle_kernel::{BlankPolicy, Grid};
use npuzzle_search::{search, SearchPolicy, SearchResult, Strategy};

/// A named start/goal pair with the policy to run it under.
#[derive(Debug, Clone)]
pub struct Regime {
    pub name: &'static str,
    pub start: Grid,
    pub goal: Grid,
    pub policy: SearchPolicy,
}

/// Board used throughout the tests; 26 moves from the goal.
pub const REFERENCE_START: &str = "7 2 4 5 0 6 8 3 1";
pub const REFERENCE_GOAL: &str = "0 1 2 3 4 5 6 7 8";

/// Parse a space-separated board.
///
/// # Panics
///
/// Panics on a malformed board. Benchmark setup failures are fatal.
#[must_use]
pub fn board(text: &str) -> Grid {
    Grid::parse(text, " ").expect("benchmark board parses")
}

fn policy(strategy: Strategy, blank_policy: BlankPolicy, snapshots: bool) -> SearchPolicy {
    SearchPolicy {
        strategy,
        blank_policy,
        record_frontier_snapshots: snapshots,
        ..SearchPolicy::default()
    }
}

/// Regimes that finish in well under a second each in release builds.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    let start = board(REFERENCE_START);
    let goal = board(REFERENCE_GOAL);
    let short_start = board("1 2 3 4 0 5 7 8 6");
    let short_goal = board("1 2 3 4 5 6 7 8 0");
    vec![
        Regime {
            name: "astar_reference",
            start: start.clone(),
            goal: goal.clone(),
            policy: policy(Strategy::AStar, BlankPolicy::Counted, false),
        },
        Regime {
            name: "astar_reference_snapshots",
            start: start.clone(),
            goal: goal.clone(),
            policy: policy(Strategy::AStar, BlankPolicy::Counted, true),
        },
        Regime {
            name: "astar_reference_tiles_only",
            start,
            goal,
            policy: policy(Strategy::AStar, BlankPolicy::Ignored, false),
        },
        Regime {
            name: "bfs_short",
            start: short_start.clone(),
            goal: short_goal.clone(),
            policy: policy(Strategy::BreadthFirst, BlankPolicy::Counted, false),
        },
        Regime {
            name: "dfs_short",
            start: short_start,
            goal: short_goal,
            policy: policy(Strategy::DepthFirst, BlankPolicy::Counted, false),
        },
        Regime {
            name: "bfs_unsolvable_2x2",
            start: board("2 1 3 0"),
            goal: board("1 2 3 0"),
            policy: policy(Strategy::BreadthFirst, BlankPolicy::Counted, false),
        },
    ]
}

/// Run one regime through `search()` only.
///
/// # Panics
///
/// Panics if pre-flight validation fails. Benchmark setup failures are fatal.
#[must_use]
pub fn run_regime(regime: &Regime) -> SearchResult {
    search(regime.start.clone(), &regime.goal, &regime.policy).expect("regime passes pre-flight")
}
