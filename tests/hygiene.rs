//! Hygiene: production sources of the landing crate stay panic-free.
//!
//! Each pattern has a budget (ideally zero). Budgets only ever go down: to
//! add an occurrence, remove another one first. Browser glue in this crate
//! uses `let _ =` to consume arguments on non-`csr` builds and `.ok()` to
//! turn failed DOM casts into `None`; those budgets hold today's count.

use std::fs;
use std::path::Path;

/// Collect production `.rs` files under `src/`, skipping `*_test.rs`.
fn source_files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
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

fn check(pattern: &str, budget: usize) {
    let hits = source_files()
        .into_iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((path, count))
        })
        .collect::<Vec<_>>();
    let total: usize = hits.iter().map(|(_, count)| count).sum();
    let listing = hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>();
    assert!(
        total <= budget,
        "`{pattern}` budget exceeded: found {total}, max {budget}.\n{}",
        listing.join("\n")
    );
}

macro_rules! budget {
    ($name:ident, $pattern:expr, $max:expr) => {
        #[test]
        fn $name() {
            check($pattern, $max);
        }
    };
}

// Panics: these crash the page.
budget!(unwrap_budget, ".unwrap()", 0);
budget!(expect_budget, ".expect(", 0);
budget!(panic_budget, "panic!(", 0);
budget!(unreachable_budget, "unreachable!(", 0);
budget!(todo_budget, "todo!(", 0);
budget!(unimplemented_budget, "unimplemented!(", 0);

// Silent loss: discards errors without inspecting.
budget!(silent_discard_budget, "let _ =", 11);
budget!(dot_ok_budget, ".ok()", 13);

// Style / structure.
budget!(allow_dead_code_budget, "#[allow(dead_code)]", 0);
