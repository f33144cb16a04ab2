//! Structured logging for solver runs.
//!
//! ## Log Levels
//!
//! - **INFO**: run lifecycle (`search_start`, `search_finish`, parity check)
//! - **DEBUG**: progress every 100 000 expansions
//! - **TRACE**: individual expansions and stale pops

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_DIRECTIVES: &str = "warn,npuzzle_search=info,npuzzle_harness=info";

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call multiple times - only the first call has effect. If another
/// global subscriber is already installed, that one is kept.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    });
}
