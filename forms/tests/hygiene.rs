//! Hygiene checks over the `forms` production sources.
//!
//! Each pattern has a budget. The only allowed `expect` is the compile of the
//! constant email pattern; the budget does not grow.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics on None/Err" },
    Budget { pattern: ".expect(", max: 1, why: "panics on None/Err" },
    Budget { pattern: "panic!(", max: 0, why: "crashes the page" },
    Budget { pattern: "unreachable!(", max: 0, why: "crashes the page" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "let _ =", max: 0, why: "discards a value unseen" },
    Budget { pattern: ".ok()", max: 0, why: "drops the error" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" },
];

/// Production `.rs` files under `src/`, skipping `*_test.rs`.
fn production_sources() -> Vec<(String, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn hits(files: &[(String, String)], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = production_sources();
    assert!(
        files.iter().any(|(path, _)| path.ends_with("field.rs")),
        "expected to scan src/field.rs, found {} files",
        files.len()
    );
}

#[test]
fn patterns_stay_within_budget() {
    let files = production_sources();
    let mut over = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let total: usize = found.iter().map(|(_, n)| n).sum();
        if total > budget.max {
            let detail = found
                .iter()
                .map(|(path, n)| format!("    {path}: {n}"))
                .collect::<Vec<_>>()
                .join("\n");
            over.push(format!(
                "`{}` found {total}, max {} ({})\n{detail}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(over.is_empty(), "hygiene budget exceeded:\n{}", over.join("\n"));
}
