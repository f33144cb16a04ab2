//! npuzzle harness: caller-side orchestration around the search engine.
//!
//! The harness turns two board strings and a [`SolverConfig`] into a
//! [`SolveReport`]. It does NOT implement search logic; it delegates to
//! `npuzzle_search` and only owns input validation, configuration and
//! reporting.
//!
//! # Pipeline
//!
//! ```text
//! SolverConfig::search_policy() → parse start/goal → blank checks
//!   → parity diagnostic → search() → SolveReport → to_json_bytes() / trace_digest()
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod logging;
pub mod report;
pub mod runner;

pub use config::{ConfigError, SearchConfig, SolverConfig};
pub use report::{ReportStep, SolveReport};
pub use runner::{solve, InputRole, RunError};
