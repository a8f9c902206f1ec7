//! Lint: page code must not panic on missing DOM pieces.
//!
//! Every DOM lookup is optional and degrades to a no-op, so `.unwrap()` and
//! `.expect(` have no place in non-test code. A panic in a wasm callback
//! takes the whole page behaviour down with it.
//!
//! This test scans every `.rs` file under `src/` up to its `#[cfg(test)]`
//! section and flags such calls.

use std::fs;
use std::path::Path;

/// Scan source lines before the first `#[cfg(test)]` module for panicking
/// unwraps. A `#[cfg(test)]` on a single item does not end the scan.
fn find_unwraps(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();
    let lines: Vec<&str> = source.lines().collect();

    for (line_num_0, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        // Test module starts here; everything after may unwrap freely.
        if trimmed.starts_with("#[cfg(test)]") && opens_module(&lines[line_num_0 + 1..]) {
            break;
        }

        // Skip comments
        if trimmed.starts_with("//") {
            continue;
        }

        if line.contains(".unwrap()") || line.contains(".expect(") {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }

    violations
}

/// Whether the item following an attribute is a `mod` declaration.
fn opens_module(rest: &[&str]) -> bool {
    let Some(item) = rest
        .iter()
        .map(|l| l.trim())
        .find(|l| !l.is_empty() && !l.starts_with("#[") && !l.starts_with("//"))
    else {
        return false;
    };
    let item = item
        .strip_prefix("pub(crate) ")
        .or_else(|| item.strip_prefix("pub "))
        .unwrap_or(item);
    item.starts_with("mod ")
}

#[test]
fn no_unwrap_in_page_code() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut all_violations = Vec::new();

    visit_source_files(&src_dir, &mut all_violations);

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "Found .unwrap()/.expect( in non-test page code.\n\
             Treat missing elements as Option and skip the update, or\n\
             propagate JsValue errors with `?`.\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

fn visit_source_files(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_source_files(&path, violations);
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            let display_path = path.display().to_string();
            for (line_num, line) in find_unwraps(&source) {
                violations.push((display_path.clone(), line_num, line));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_unwrap() {
        let source = "let el = dom::by_id(\"x\").unwrap();";
        assert_eq!(find_unwraps(source).len(), 1);
    }

    #[test]
    fn detects_expect() {
        let source = "let doc = window.document().expect(\"document\");";
        assert_eq!(find_unwraps(source).len(), 1);
    }

    #[test]
    fn allows_unwrap_or_variants() {
        let source = "let v = raw.unwrap_or_default();\nlet w = x.unwrap_or(0);";
        assert!(find_unwraps(source).is_empty());
    }

    #[test]
    fn ignores_comments() {
        let source = "// do not .unwrap() here";
        assert!(find_unwraps(source).is_empty());
    }

    #[test]
    fn stops_at_test_module() {
        let source = "fn f() {}\n#[cfg(test)]\nmod tests {\n    fn t() { x.unwrap(); }\n}";
        assert!(find_unwraps(source).is_empty());
    }

    #[test]
    fn stops_at_crate_visible_test_module() {
        let source = "#[cfg(test)]\npub(crate) mod tests {\n    fn t() { x.unwrap(); }\n}";
        assert!(find_unwraps(source).is_empty());
    }

    #[test]
    fn item_level_cfg_test_keeps_scanning() {
        let source = "#[cfg(test)]\npub fn helper() -> u8 { 1 }\n\n\
                      pub fn live(r: Option<u8>) -> u8 {\n    r.unwrap()\n}";
        let found = find_unwraps(source);
        assert_eq!(found, vec![(5, "r.unwrap()".to_string())]);
    }
}
