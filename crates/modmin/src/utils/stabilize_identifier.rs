use std::path::Path;

use sugar_path::SugarPath;

/// Makes absolute module identifiers relative to `cwd` with forward slashes, so the same module
/// is named the same way on every machine.
pub fn stabilize_identifier(identifier: &str, cwd: &Path) -> String {
  if identifier.as_path().is_absolute() {
    identifier.relative(cwd).as_path().to_slash_lossy().into_owned()
  } else {
    identifier.to_string()
  }
}

#[cfg(unix)]
#[test]
fn test_stabilize_identifier() {
  let cwd = Path::new("/repo");
  assert_eq!(stabilize_identifier("/repo/src/index.js", cwd), "src/index.js");
  assert_eq!(stabilize_identifier("/other/lib.js", cwd), "../other/lib.js");
  assert_eq!(stabilize_identifier("./src/index.js", cwd), "./src/index.js");
}
