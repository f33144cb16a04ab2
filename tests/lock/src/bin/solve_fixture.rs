//! Binary that runs one solve through the harness and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `solve_fixture <strategy> <start> <goal>`
//!
//! Boards are space-separated. Output: key=value lines (see source for
//! format). Wall-clock time is never printed; logs go to stderr. Bad
//! arguments or boards exit with code 2.

use std::process::ExitCode;

use npuzzle_harness::{logging, solve, SolverConfig};
use npuzzle_search::Strategy;

fn main() -> ExitCode {
    logging::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [strategy, start, goal] = args.as_slice() else {
        eprintln!("usage: solve_fixture <strategy> <start> <goal>");
        return ExitCode::from(2);
    };
    let strategy: Strategy = match strategy.parse() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let config = SolverConfig::new().with_strategy(strategy);
    let report = match solve(start, goal, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    let trace_digest = match report.trace_digest() {
        Ok(h) => h,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let actions = report
        .actions()
        .map(|a| a.iter().map(|x| x.name()).collect::<Vec<_>>().join(","))
        .unwrap_or_default();
    let depth = report
        .depth()
        .map_or_else(|| "none".to_string(), |d| d.to_string());
    let path_digest = report
        .path_digest()
        .map_or_else(|| "none".to_string(), |h| h.as_str().to_string());

    println!("strategy={}", report.strategy);
    println!("success={}", report.success);
    println!("termination={}", report.termination.name());
    println!("depth={depth}");
    println!("visited_count={}", report.stats.visited_count);
    println!("expansions={}", report.stats.expansions);
    println!("nodes_generated={}", report.stats.nodes_generated);
    println!("memory_bytes={}", report.stats.memory_bytes);
    println!("actions={actions}");
    println!("path_digest={path_digest}");
    println!("trace_digest={}", trace_digest.as_str());
    ExitCode::SUCCESS
}
