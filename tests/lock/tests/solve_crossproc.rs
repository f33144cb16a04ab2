//! Cross-process determinism test for solve reports.
//!
//! Spawns the `solve_fixture` binary under 4 environment variants per
//! strategy and asserts all produce identical output.

use std::path::Path;
use std::process::Command;

use npuzzle_harness::{solve, SolverConfig};
use npuzzle_kernel::proof::hash::ContentHash;
use npuzzle_search::Strategy;

const START: &str = "7 2 4 5 0 6 8 3 1";
const NEAR_START: &str = "1 2 3 4 0 5 7 8 6";
const GOAL: &str = "0 1 2 3 4 5 6 7 8";
const NEAR_GOAL: &str = "1 2 3 4 5 6 7 8 0";

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("solve_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.args(args).current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

/// The value of `key=` in fixture output.
fn field<'a>(out: &'a str, key: &str) -> &'a str {
    out.lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
        .unwrap_or_else(|| panic!("no {key}= line in {out}"))
}

/// Parses a digest line and checks it is a full SHA-256 digest.
fn digest(out: &str, key: &str) -> ContentHash {
    let text = field(out, key);
    let hash = ContentHash::parse(text).unwrap_or_else(|| panic!("{key} is malformed: {text}"));
    assert_eq!(hash.algorithm(), "sha256");
    assert_eq!(hash.hex_digest().len(), 64);
    assert!(hash.hex_digest().bytes().all(|b| b.is_ascii_hexdigit()));
    hash
}

fn assert_four_variants_agree(args: &[&str]) -> String {
    let root = workspace_root();
    let baseline = run_variant(&root, args, &[]);

    // Variant 2: different cwd.
    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(alt_cwd, args, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    // Variant 3: different locale env.
    let variant_locale = run_variant(&root, args, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    // Variant 4: spurious env vars, verbose logging on stderr.
    let variant_noise = run_variant(
        &root,
        args,
        &[
            ("NPUZZLE_NOISE", "1"),
            ("RUST_LOG", "trace"),
            ("TZ", "Pacific/Auckland"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with spurious env vars");

    baseline
}

#[test]
fn crossproc_a_star_assignment_case() {
    let out = assert_four_variants_agree(&["astar", START, GOAL]);
    assert!(out.contains("strategy=astar\n"), "{out}");
    assert!(out.contains("success=true\n"));
    assert!(out.contains("termination=goal_reached\n"));
    assert!(out.contains("depth=26\n"));
    assert!(out.contains("visited_count=3177\n"));

    let config = SolverConfig::new().with_strategy(Strategy::AStar);
    let report = solve(START, GOAL, &config).unwrap();
    assert_eq!(digest(&out, "trace_digest"), report.trace_digest().unwrap());
    assert_eq!(Some(digest(&out, "path_digest")), report.path_digest());
}

#[test]
fn crossproc_each_strategy_on_short_case() {
    for strategy in ["bfs", "dfs", "astar"] {
        let out = assert_four_variants_agree(&[strategy, NEAR_START, NEAR_GOAL]);
        assert!(out.contains("success=true\n"), "{strategy}: {out}");
    }
}

#[test]
fn crossproc_unsolvable_reports_failure() {
    let out = assert_four_variants_agree(&["bfs", "2 1 3 0", "1 2 3 0"]);
    assert!(out.contains("success=false\n"), "{out}");
    assert!(out.contains("termination=frontier_exhausted\n"));
    assert!(out.contains("depth=none\n"));
    assert!(out.contains("visited_count=12\n"));
    assert!(out.contains("path_digest=none\n"));
    digest(&out, "trace_digest");
}

#[test]
fn fixture_rejects_bad_arguments() {
    let status = Command::new(binary_path())
        .args(["greedy", START, GOAL])
        .output()
        .expect("spawn solve_fixture")
        .status;
    assert_eq!(status.code(), Some(2));

    let status = Command::new(binary_path())
        .arg("bfs")
        .output()
        .expect("spawn solve_fixture")
        .status;
    assert_eq!(status.code(), Some(2));
}

#[test]
fn fixture_rejects_malformed_boards() {
    for (start, goal) in [("1 2 x 0", "1 2 3 0"), ("1 2 3", "1 2 3 0"), ("1 2 3 0", GOAL)] {
        let output = Command::new(binary_path())
            .args(["astar", start, goal])
            .output()
            .expect("spawn solve_fixture");
        assert_eq!(output.status.code(), Some(2), "{start} -> {goal}");
        assert!(output.stdout.is_empty());
        assert!(!output.stderr.is_empty());
    }
}
