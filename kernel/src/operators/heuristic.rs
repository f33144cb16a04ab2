//! Manhattan-distance heuristic.
//!
//! By default the blank is counted like any other tile. A single move
//! displaces both the blank and one tile, so the blank-inclusive sum can
//! overestimate by up to a factor of two and A* may then return a longer path
//! than BFS.
//! [`BlankPolicy::Ignored`] gives the classic admissible, consistent variant.

use serde::{Deserialize, Serialize};

use crate::carrier::grid::{Grid, Tile, BLANK};

/// Whether the blank contributes to the distance sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankPolicy {
    /// The blank is summed like any tile.
    #[default]
    Counted,
    /// Only numbered tiles are summed (admissible).
    Ignored,
}

/// Goal coordinate of every tile value, built once per search.
#[derive(Debug, Clone)]
pub struct GoalPositions {
    /// Indexed by tile value. `None` for values absent from the goal.
    positions: Vec<Option<(usize, usize)>>,
}

impl GoalPositions {
    /// Index the goal board, counting the blank.
    #[must_use]
    pub fn new(goal: &Grid) -> Self {
        Self::with_blank_policy(goal, BlankPolicy::Counted)
    }

    /// Index the goal board. On duplicate values the last occurrence wins.
    #[must_use]
    pub fn with_blank_policy(goal: &Grid, blank_policy: BlankPolicy) -> Self {
        let max_tile = goal.cells().iter().copied().max().unwrap_or(0);
        let mut positions = vec![None; usize::from(max_tile) + 1];
        for (idx, &tile) in goal.cells().iter().enumerate() {
            positions[usize::from(tile)] = Some((idx / goal.side(), idx % goal.side()));
        }
        if blank_policy == BlankPolicy::Ignored {
            positions[usize::from(BLANK)] = None;
        }
        Self { positions }
    }

    /// Goal coordinate of `tile`, if the goal holds it.
    #[must_use]
    pub fn position(&self, tile: Tile) -> Option<(usize, usize)> {
        self.positions.get(usize::from(tile)).copied().flatten()
    }

    /// Manhattan distance from `grid` to the indexed goal.
    ///
    /// Tiles the goal does not contain contribute 0.
    #[must_use]
    pub fn distance(&self, grid: &Grid) -> u32 {
        let side = grid.side();
        let total: usize = grid
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(idx, &tile)| {
                self.position(tile)
                    .map(|(gr, gc)| (idx / side).abs_diff(gr) + (idx % side).abs_diff(gc))
            })
            .sum();
        u32::try_from(total).unwrap_or(u32::MAX)
    }
}

/// Manhattan distance between `grid` and `goal`, blank included.
#[must_use]
pub fn manhattan_distance(grid: &Grid, goal: &Grid) -> u32 {
    GoalPositions::new(goal).distance(grid)
}
