//! Operators module: blank moves, successor generation, and the heuristic.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod action;
pub mod apply;
pub mod heuristic;
