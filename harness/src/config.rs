//! Solver configuration loaded from TOML.
//!
//! Every key is optional; missing keys fall back to the defaults of
//! [`SearchPolicy`].
//!
//! ```toml
//! strategy = "astar"
//! separator = " "
//!
//! [search]
//! max_expansions = 500000
//! time_limit_ms = 10000
//! record_frontier_snapshots = true
//! heuristic_blank = "ignored"
//! ```

use std::path::Path;
use std::time::Duration;

use npuzzle_kernel::{BlankPolicy, DEFAULT_SEPARATOR};
use npuzzle_search::{SearchPolicy, Strategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct SolverConfig {
    /// Traversal strategy (`bfs`, `dfs`, `astar` and their aliases).
    #[serde(default)]
    pub strategy: Strategy,

    /// Separator for parsing boards and for fingerprints.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Ceilings and diagnostics.
    #[serde(default)]
    pub search: SearchConfig,
}

/// The `[search]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default)]
    pub max_expansions: Option<u64>,

    #[serde(default)]
    pub time_limit_ms: Option<u64>,

    #[serde(default)]
    pub record_frontier_snapshots: bool,

    /// `counted` (default) or `ignored`.
    #[serde(default)]
    pub heuristic_blank: BlankPolicy,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            separator: default_separator(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: None,
            time_limit_ms: None,
            record_frontier_snapshots: false,
            heuristic_blank: BlankPolicy::default(),
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] on malformed TOML, unknown keys or an
    /// unknown strategy name.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the expansion ceiling.
    #[must_use]
    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.search.max_expansions = Some(limit);
        self
    }

    /// Sets the wall-clock ceiling in milliseconds.
    #[must_use]
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.search.time_limit_ms = Some(ms);
        self
    }

    /// Enables or disables A* frontier snapshots.
    #[must_use]
    pub fn with_frontier_snapshots(mut self, record: bool) -> Self {
        self.search.record_frontier_snapshots = record;
        self
    }

    /// Sets whether the blank counts toward the heuristic.
    #[must_use]
    pub fn with_heuristic_blank(mut self, policy: BlankPolicy) -> Self {
        self.search.heuristic_blank = policy;
        self
    }

    /// Returns the wall-clock ceiling, if configured.
    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.search.time_limit_ms.map(Duration::from_millis)
    }

    /// Converts to a validated [`SearchPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the resulting policy fails
    /// validation.
    pub fn search_policy(&self) -> Result<SearchPolicy, ConfigError> {
        let policy = SearchPolicy {
            strategy: self.strategy,
            separator: self.separator.clone(),
            max_expansions: self.search.max_expansions,
            time_limit: self.time_limit(),
            record_frontier_snapshots: self.search.record_frontier_snapshots,
            blank_policy: self.search.heuristic_blank,
        };
        policy
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(policy)
    }
}
