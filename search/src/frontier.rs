//! Strategy-specific frontier with the visited set of expanded fingerprints.
//!
//! Uses a `BTreeSet`-based visited set (not `HashSet`) so membership never
//! depends on a randomized hasher.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, VecDeque};
use std::fmt::Write as _;

use crate::node::{FrontierKey, SearchNode};
use crate::policy::Strategy;

/// A min-heap entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest cost first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: SearchNode,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
enum Store {
    Fifo(VecDeque<SearchNode>),
    Lifo(Vec<SearchNode>),
    BestFirst(BinaryHeap<FrontierEntry>),
}

/// Frontier manager.
///
/// Maintains:
/// - The pending nodes in the strategy's removal order
/// - A `BTreeSet<String>` of expanded fingerprints
/// - The high-water mark of pending nodes
///
/// Unlike a push-time dedup, the same board may sit on the frontier more than
/// once. Only its first pop is expanded; callers check [`Self::is_expanded`]
/// and drop the rest.
#[derive(Debug)]
pub struct Frontier {
    store: Store,
    visited: BTreeSet<String>,
    high_water: u64,
}

impl Frontier {
    /// Create an empty frontier for `strategy`.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        let store = match strategy {
            Strategy::BreadthFirst => Store::Fifo(VecDeque::new()),
            Strategy::DepthFirst => Store::Lifo(Vec::new()),
            Strategy::AStar => Store::BestFirst(BinaryHeap::new()),
        };
        Self {
            store,
            visited: BTreeSet::new(),
            high_water: 0,
        }
    }

    /// Add a pending node.
    pub fn push(&mut self, node: SearchNode) {
        match &mut self.store {
            Store::Fifo(queue) => queue.push_back(node),
            Store::Lifo(stack) => stack.push(node),
            Store::BestFirst(heap) => heap.push(FrontierEntry {
                key: Reverse(node.key()),
                node,
            }),
        }
        let size = self.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove the next node per the strategy's removal policy.
    #[must_use]
    pub fn pop(&mut self) -> Option<SearchNode> {
        match &mut self.store {
            Store::Fifo(queue) => queue.pop_front(),
            Store::Lifo(stack) => stack.pop(),
            Store::BestFirst(heap) => heap.pop().map(|e| e.node),
        }
    }

    /// Textual snapshot of pending costs, formatted `[F(x)=c1, F(x)=c2, ...]`
    /// in the order they would be popped.
    ///
    /// `None` for frontiers that carry no costs (BFS, DFS).
    #[must_use]
    pub fn cost_snapshot(&self) -> Option<String> {
        let Store::BestFirst(heap) = &self.store else {
            return None;
        };
        let mut keys: Vec<FrontierKey> = heap.iter().map(|e| e.key.0).collect();
        keys.sort_unstable();
        let mut out = String::with_capacity(2 + keys.len() * 10);
        out.push('[');
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "F(x)={}", key.cost);
        }
        out.push(']');
        Some(out)
    }

    /// Whether a board with this fingerprint has already been expanded.
    #[must_use]
    pub fn is_expanded(&self, fingerprint: &str) -> bool {
        self.visited.contains(fingerprint)
    }

    /// Record a fingerprint as expanded.
    ///
    /// Returns `false` if it was already present.
    pub fn mark_expanded(&mut self, fingerprint: String) -> bool {
        self.visited.insert(fingerprint)
    }

    /// Number of distinct expanded fingerprints.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.visited.len()
    }

    /// Current number of pending nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Fifo(queue) => queue.len(),
            Store::Lifo(stack) => stack.len(),
            Store::BestFirst(heap) => heap.len(),
        }
    }

    /// Whether no nodes are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of pending nodes.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
