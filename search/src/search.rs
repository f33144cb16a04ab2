//! Search entry point and expansion loop.

use std::time::{Duration, Instant};

use npuzzle_kernel::operators::apply::successors;
use npuzzle_kernel::operators::heuristic::GoalPositions;
use npuzzle_kernel::{Action, Grid};
use tracing::{debug, info, trace};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::outcome::{SearchStats, SolutionStep, TerminationReason};
use crate::policy::{SearchPolicy, Strategy};

/// Result of a search execution.
///
/// Always carries statistics regardless of how the search terminated. Check
/// [`SearchResult::is_goal_reached`] or inspect `termination` to determine
/// the outcome.
#[derive(Debug)]
pub struct SearchResult {
    /// Strategy the run used.
    pub strategy: Strategy,
    /// Why the loop stopped.
    pub termination: TerminationReason,
    /// The goal node (if found). It is never part of `arena`.
    pub goal: Option<SearchNode>,
    /// Every expanded node, indexed by the `parent` links of its children.
    pub arena: Vec<SearchNode>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached { .. })
    }

    /// Solution steps from root to goal, or `None` if no goal was reached.
    #[must_use]
    pub fn steps(&self) -> Option<Vec<SolutionStep>> {
        let goal = self.goal.as_ref()?;
        Some(
            reconstruct_path(goal, &self.arena)
                .into_iter()
                .map(SolutionStep::from)
                .collect(),
        )
    }

    /// Moves from root to goal, or `None` if no goal was reached.
    #[must_use]
    pub fn actions(&self) -> Option<Vec<Action>> {
        let goal = self.goal.as_ref()?;
        Some(
            reconstruct_path(goal, &self.arena)
                .into_iter()
                .filter_map(|node| node.action)
                .collect(),
        )
    }
}

/// Walk parent links from `goal` back to the root, returning root first.
///
/// Stops early if a parent index falls outside `arena`.
#[must_use]
pub fn reconstruct_path<'a>(goal: &'a SearchNode, arena: &'a [SearchNode]) -> Vec<&'a SearchNode> {
    let mut path = vec![goal];
    let mut cursor = goal.parent;
    while let Some(idx) = cursor {
        let Some(node) = arena.get(idx) else {
            break;
        };
        path.push(node);
        cursor = node.parent;
    }
    path.reverse();
    path
}

/// Builds nodes with consecutive creation orders and, for A*, their costs.
struct NodeFactory<'a> {
    separator: &'a str,
    heuristic: Option<GoalPositions>,
    next_creation_order: u64,
}

impl<'a> NodeFactory<'a> {
    fn new(policy: &'a SearchPolicy, goal: &Grid) -> Self {
        let heuristic = policy
            .strategy
            .is_informed()
            .then(|| GoalPositions::with_blank_policy(goal, policy.blank_policy));
        Self {
            separator: &policy.separator,
            heuristic,
            next_creation_order: 0,
        }
    }

    fn fingerprint(&self, grid: &Grid) -> String {
        grid.fingerprint(self.separator)
    }

    fn make(
        &mut self,
        grid: Grid,
        fingerprint: String,
        parent: Option<usize>,
        depth: u32,
        action: Option<Action>,
    ) -> SearchNode {
        let heuristic = self.heuristic.as_ref().map(|h| h.distance(&grid));
        let creation_order = self.next_creation_order;
        self.next_creation_order += 1;
        SearchNode {
            creation_order,
            parent,
            grid,
            fingerprint,
            depth,
            heuristic,
            cost: heuristic.map(|h| depth.saturating_add(h)),
            action,
            frontier_snapshot: None,
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Checks that `start`, `goal` and `policy` can drive a run, without running it.
///
/// [`search`] performs the same checks first.
///
/// # Errors
///
/// Same pre-flight failures as [`search`].
pub fn preflight(start: &Grid, goal: &Grid, policy: &SearchPolicy) -> Result<(), SearchError> {
    policy.validate()?;
    if start.side() != goal.side() {
        return Err(SearchError::DimensionMismatch {
            start: start.side(),
            goal: goal.side(),
        });
    }
    start.blank_position()?;
    goal.blank_position()?;
    Ok(())
}

/// Run one search from `start` to `goal` under `policy`.
///
/// Every pop follows the same sequence: goal check, stale check, push the
/// successors whose boards are not yet expanded, then mark the node expanded
/// and move it into the arena.
///
/// # Errors
///
/// Pre-flight failures only:
/// - [`SearchError::InvalidPolicy`] if `policy.validate()` fails.
/// - [`SearchError::DimensionMismatch`] if the boards differ in side.
/// - [`SearchError::Kernel`] if either board has no blank.
pub fn search(
    start: Grid,
    goal: &Grid,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    preflight(&start, goal, policy)?;

    let started = Instant::now();
    let mut factory = NodeFactory::new(policy, goal);
    let goal_fp = factory.fingerprint(goal);
    let mut frontier = Frontier::new(policy.strategy);
    let mut arena: Vec<SearchNode> = Vec::new();
    let mut stats = SearchStats::default();
    let snapshots = policy.strategy.is_informed() && policy.record_frontier_snapshots;

    info!(
        event = "search_start",
        strategy = %policy.strategy,
        side = start.side(),
        blank_policy = ?policy.blank_policy,
        max_expansions = ?policy.max_expansions,
        time_limit_ms = ?policy.time_limit.map(millis),
    );

    let root_fp = factory.fingerprint(&start);
    let root = factory.make(start, root_fp, None, 0, None);
    stats.nodes_generated = 1;
    frontier.push(root);

    let (termination, goal_node) = loop {
        if let Some(limit) = policy.max_expansions {
            if stats.expansions >= limit {
                break (TerminationReason::ExpansionBudgetExceeded { limit }, None);
            }
        }
        if let Some(limit) = policy.time_limit {
            if started.elapsed() >= limit {
                break (
                    TerminationReason::TimeBudgetExceeded {
                        limit_ms: millis(limit),
                    },
                    None,
                );
            }
        }

        let snapshot = if snapshots {
            frontier.cost_snapshot()
        } else {
            None
        };
        let Some(mut current) = frontier.pop() else {
            break (TerminationReason::FrontierExhausted, None);
        };
        current.frontier_snapshot = snapshot;

        if current.fingerprint == goal_fp {
            stats.memory_bytes += current.footprint();
            break (
                TerminationReason::GoalReached {
                    depth: current.depth,
                },
                Some(current),
            );
        }

        if frontier.is_expanded(&current.fingerprint) {
            stats.stale_pops += 1;
            trace!(event = "stale_pop", creation_order = current.creation_order);
            continue;
        }

        let parent = arena.len();
        let depth = current.depth.saturating_add(1);
        for (action, grid) in successors(&current.grid)? {
            let fingerprint = factory.fingerprint(&grid);
            if frontier.is_expanded(&fingerprint) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let child = factory.make(grid, fingerprint, Some(parent), depth, Some(action));
            stats.nodes_generated += 1;
            frontier.push(child);
        }

        trace!(
            event = "expand",
            expansion = stats.expansions,
            depth = current.depth,
            cost = ?current.cost,
            frontier = frontier.len(),
        );
        stats.expansions += 1;
        stats.memory_bytes += current.footprint();
        frontier.mark_expanded(current.fingerprint.clone());
        arena.push(current);

        if stats.expansions % 100_000 == 0 {
            debug!(
                event = "search_progress",
                expansions = stats.expansions,
                frontier = frontier.len(),
            );
        }
    };

    stats.visited_count = frontier.expanded_count() as u64;
    stats.frontier_high_water = frontier.high_water();
    stats.elapsed = started.elapsed();

    info!(
        event = "search_finish",
        strategy = %policy.strategy,
        termination = termination.name(),
        depth = goal_node.as_ref().map(|n| n.depth),
        visited = stats.visited_count,
        generated = stats.nodes_generated,
        memory_bytes = stats.memory_bytes,
        elapsed_ms = millis(stats.elapsed),
    );

    Ok(SearchResult {
        strategy: policy.strategy,
        termination,
        goal: goal_node,
        arena,
        stats,
    })
}
