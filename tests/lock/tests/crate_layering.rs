//! Build-graph isolation.
//!
//! Verifies that lower crates never reference higher ones: `kernel/` names
//! neither `npuzzle_search` nor `npuzzle_harness`, and `search/` never names
//! `npuzzle_harness`.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Scan all `.rs` files under a directory for forbidden patterns.
fn scan_rs_files(dir: &Path, forbidden: &[&str]) -> Vec<(String, usize, String)> {
    let mut violations = Vec::new();
    walk(dir, forbidden, &mut violations);
    violations
}

fn walk(dir: &Path, forbidden: &[&str], violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, forbidden, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, forbidden, violations);
        }
    }
}

fn check_file(path: &Path, forbidden: &[&str], violations: &mut Vec<(String, usize, String)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        // Skip comments.
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }
        for pattern in forbidden {
            if trimmed.contains(pattern) {
                violations.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
}

/// Resolve the workspace root from `CARGO_MANIFEST_DIR` of the lock-tests crate.
fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so workspace root is ../..
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn assert_clean(crate_dir: &str, forbidden: &[&str]) {
    let dir = workspace_root().join(crate_dir);
    assert!(dir.is_dir(), "{crate_dir}/ must exist");
    let violations = scan_rs_files(&dir, forbidden);
    if !violations.is_empty() {
        let mut msg = format!("{crate_dir}/ references a higher crate:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

fn assert_manifest_lacks(crate_dir: &str, forbidden: &[&str]) {
    let manifest = workspace_root().join(crate_dir).join("Cargo.toml");
    let text = fs::read_to_string(&manifest).expect("manifest readable");
    for pattern in forbidden {
        assert!(
            !text.contains(pattern),
            "{} depends on {pattern}",
            manifest.display()
        );
    }
}

#[test]
fn kernel_does_not_reference_search_or_harness() {
    assert_clean("kernel", &["npuzzle_search", "npuzzle_harness"]);
    assert_manifest_lacks("kernel", &["npuzzle-search", "npuzzle-harness"]);
}

#[test]
fn search_does_not_reference_harness() {
    assert_clean("search", &["npuzzle_harness"]);
    assert_manifest_lacks("search", &["npuzzle-harness"]);
}
