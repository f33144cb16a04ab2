//! npuzzle search: BFS, DFS and A* over sliding-tile boards.
//!
//! This crate provides the search layer. It depends only on `npuzzle_kernel`;
//! it does NOT depend on `npuzzle_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! npuzzle_kernel  ←  npuzzle_search  ←  npuzzle_harness
//! (board, moves)     (frontier, nodes)   (config, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`] -- one board plus its path-cost bookkeeping
//! - [`Frontier`] -- FIFO, LIFO or min-heap store with the visited set
//! - [`SearchPolicy`] -- strategy, separator, and optional ceilings
//! - [`SearchResult`] -- termination reason, arena, statistics, solution path

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod outcome;
pub mod policy;
pub mod search;

pub use error::SearchError;
pub use frontier::Frontier;
pub use node::{FrontierKey, SearchNode};
pub use outcome::{SearchStats, SolutionStep, TerminationReason};
pub use policy::{SearchPolicy, Strategy};
pub use search::{preflight, reconstruct_path, search, SearchResult};
