//! Core search node and frontier ordering key.

use std::cmp::Ordering;

use npuzzle_kernel::{Action, Grid};

/// A search node: one board plus its path-cost bookkeeping.
///
/// Read-only after construction, except that the engine stamps the A*
/// frontier snapshot on the node when it is popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Global counter for deterministic tie-breaking (root = 0).
    pub creation_order: u64,
    /// Index of the parent in the expanded-node arena (`None` for root).
    pub parent: Option<usize>,
    /// The board at this node.
    pub grid: Grid,
    /// `grid` serialized with the run's separator; the dedup and goal key.
    pub fingerprint: String,
    /// Path length from the root (g-cost).
    pub depth: u32,
    /// Manhattan distance to the goal. A* only.
    pub heuristic: Option<u32>,
    /// `depth + heuristic`. A* only.
    pub cost: Option<u32>,
    /// The blank move that produced this node (`None` for root).
    pub action: Option<Action>,
    /// Costs on the frontier when this node was popped, in pop order.
    pub frontier_snapshot: Option<String>,
}

impl SearchNode {
    /// Approximate bytes held by this node.
    ///
    /// Struct size plus the heap buffers it owns. Stable for a fixed input.
    #[must_use]
    pub fn footprint(&self) -> u64 {
        let bytes = std::mem::size_of::<Self>()
            + self.grid.heap_bytes()
            + self.fingerprint.len()
            + self.frontier_snapshot.as_ref().map_or(0, String::len);
        bytes as u64
    }

    /// The ordering key used by the A* frontier.
    #[must_use]
    pub fn key(&self) -> FrontierKey {
        FrontierKey::from(self)
    }
}

/// The A* frontier ordering key: `(cost, creation_order)`.
///
/// Lower `cost` first; on a tie the NEWER node (larger `creation_order`)
/// wins, so recently generated children are explored before older siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub cost: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then(other.creation_order.cmp(&self.creation_order))
    }
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            cost: node.cost.unwrap_or(node.depth),
            creation_order: node.creation_order,
        }
    }
}
