//! Hygiene — enforces coding standards at test time
//!
//! Scans the canvas crate's production sources for antipatterns. Each pattern
//! has a budget (zero); the budget never grows — fix an existing hit before
//! adding another.

use std::fs;
use std::path::Path;

/// (needle, budget, what it costs us)
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics crash the host page.
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the process"),
    ("unreachable!(", 0, "crashes the process"),
    ("todo!(", 0, "unimplemented stub"),
    ("unimplemented!(", 0, "unimplemented stub"),
    // Silent loss.
    ("let _ =", 0, "discards a value without inspecting it"),
    (".ok()", 0, "discards an error without inspecting it"),
    // Structure.
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `canvas/src/`, excluding `_test.rs` sidecars.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

#[test]
fn source_budgets() {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut violations = Vec::new();
    for (needle, budget, why) in BUDGETS {
        let mut hits = Vec::new();
        for file in &files {
            let count = file.content.lines().filter(|l| l.contains(needle)).count();
            if count > 0 {
                hits.push(format!("  {}: {count}", file.path));
            }
        }
        let count: usize = files
            .iter()
            .map(|f| f.content.lines().filter(|l| l.contains(needle)).count())
            .sum();
        if count > *budget {
            violations.push(format!(
                "`{needle}` budget exceeded ({why}): found {count}, max {budget}\n{}",
                hits.join("\n")
            ));
        }
    }
    assert!(violations.is_empty(), "{}", violations.join("\n\n"));
}
