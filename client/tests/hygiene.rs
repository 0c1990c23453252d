//! Hygiene: UI code reports failures through toasts and never panics.
//!
//! Scans `src/` (excluding `*_test.rs`) for forbidden patterns. Discarded
//! values are allowed here since the cfg-split browser/server branches
//! consume their captures with `let _ =`.

use std::fs;
use std::path::Path;

/// (pattern, budget)
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("#[allow(dead_code)]", 0),
    ("dbg!(", 0),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
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
fn forbidden_pattern_budgets() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut failures = Vec::new();
    for (pattern, budget) in BUDGETS {
        let found = hits(&files, pattern);
        let total: usize = found.iter().map(|(_, count)| count).sum();
        if total > *budget {
            let detail = found
                .iter()
                .map(|(path, count)| format!("    {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("`{pattern}` budget exceeded: found {total}, max {budget}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
