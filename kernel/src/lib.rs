//! npuzzle kernel: the board layer of the sliding-tile solver.
//!
//! # API Surface
//!
//! - [`carrier::grid::Grid`] -- immutable N×N board with parse/fingerprint
//! - [`operators::apply::successors`] -- legal one-step successors of a board
//! - [`operators::heuristic::manhattan_distance`] -- Manhattan distance estimate
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 digests
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! One-way only. `operators` depends on `carrier`; `proof` depends on nothing
//! internal and is kept last because only report digests reach for it.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod error;
pub mod operators;
pub mod proof;

pub use carrier::grid::{Grid, Tile, BLANK, DEFAULT_SEPARATOR};
pub use error::KernelError;
pub use operators::action::Action;
pub use operators::heuristic::BlankPolicy;
