use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_FILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.m?js(\?.+)?$").unwrap());

pub fn is_script_file(filename: &str) -> bool {
  SCRIPT_FILE_RE.is_match(filename)
}

#[test]
fn test_is_script_file() {
  assert!(is_script_file("main.js"));
  assert!(is_script_file("chunks/vendor.mjs"));
  assert!(is_script_file("main.js?v=3"));
  assert!(!is_script_file("main.js.map"));
  assert!(!is_script_file("main.css"));
  assert!(!is_script_file("main.json"));
}
