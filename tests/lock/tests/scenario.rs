//! Pinned outcomes for the reference board `7 2 4 5 0 6 8 3 1`.
//!
//! These numbers follow from the fixed successor order (UP, DOWN, RIGHT,
//! LEFT), the A* tie-break (newer node first) and the pop-time visited
//! check. Any change to those shows up here first.

use npuzzle_kernel::operators::apply::apply;
use npuzzle_kernel::{Action, Grid};
use npuzzle_search::{search, SearchPolicy, SearchResult, Strategy, TerminationReason};

const START: &str = "7 2 4 5 0 6 8 3 1";
const GOAL: &str = "0 1 2 3 4 5 6 7 8";

fn grid(text: &str) -> Grid {
    Grid::parse(text, " ").unwrap()
}

fn run(strategy: Strategy) -> SearchResult {
    search(grid(START), &grid(GOAL), &SearchPolicy::with_strategy(strategy)).unwrap()
}

fn replay(actions: &[Action]) -> Grid {
    actions
        .iter()
        .fold(grid(START), |g, &a| apply(&g, a).unwrap())
}

// ---------------------------------------------------------------------------
// A*
// ---------------------------------------------------------------------------

#[test]
fn a_star_pinned_counts() {
    let result = run(Strategy::AStar);
    assert_eq!(result.termination, TerminationReason::GoalReached { depth: 26 });
    assert_eq!(result.stats.visited_count, 3177);
    assert_eq!(result.stats.expansions, 3177);
    assert_eq!(result.stats.nodes_generated, 5162);
    assert_eq!(result.stats.duplicates_suppressed, 3316);
    assert_eq!(result.stats.stale_pops, 68);
}

#[test]
fn a_star_costs_along_the_path() {
    let result = run(Strategy::AStar);
    let steps = result.steps().unwrap();
    assert_eq!(steps.len(), 27);
    for step in &steps {
        let h = step.heuristic.unwrap();
        assert_eq!(step.cost, Some(step.depth + h));
    }
    assert_eq!(replay(&result.actions().unwrap()), grid(GOAL));
}

// ---------------------------------------------------------------------------
// BFS
// ---------------------------------------------------------------------------

#[test]
fn bfs_finds_the_shortest_path() {
    let result = run(Strategy::BreadthFirst);
    assert_eq!(result.termination, TerminationReason::GoalReached { depth: 26 });
    assert_eq!(result.stats.visited_count, 173_297);
    assert_eq!(replay(&result.actions().unwrap()), grid(GOAL));
}

// ---------------------------------------------------------------------------
// DFS
// ---------------------------------------------------------------------------

#[test]
fn dfs_finds_a_very_long_path() {
    let result = run(Strategy::DepthFirst);
    assert_eq!(
        result.termination,
        TerminationReason::GoalReached { depth: 84_156 }
    );
    assert_eq!(result.stats.visited_count, 166_250);
    let actions = result.actions().unwrap();
    assert_eq!(actions.len(), 84_156);
    assert_eq!(replay(&actions), grid(GOAL));
}
