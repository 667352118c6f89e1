use std::ops::Range;

use memchr::memmem;

/// Finds the modules placeholder in minified text. A template with a hole must come back with
/// exactly one copy of the token, a template without one with none.
pub fn locate_hole(
  code: &str,
  token: &str,
  expects_hole: bool,
) -> anyhow::Result<Option<Range<usize>>> {
  let mut found = memmem::find_iter(code.as_bytes(), token.as_bytes());
  let first = found.next();
  let count = usize::from(first.is_some()) + found.count();
  match (first, count, expects_hole) {
    (None, 0, false) => Ok(None),
    (Some(start), 1, true) => Ok(Some(start..start + token.len())),
    _ => anyhow::bail!(
      "expected {} `{token}` in the minified code, found {count}",
      if expects_hole { "exactly one" } else { "no" }
    ),
  }
}

#[test]
fn test_locate_hole() {
  let token = "__CHUNK_MODULES__";
  assert_eq!(locate_hole("f(__CHUNK_MODULES__);", token, true).unwrap(), Some(2..19));
  assert_eq!(locate_hole("f();", token, false).unwrap(), None);
  assert!(locate_hole("f();", token, true).is_err());
  assert!(locate_hole("f(__CHUNK_MODULES__,__CHUNK_MODULES__);", token, true).is_err());
  assert!(locate_hole("f(__CHUNK_MODULES__);", token, false).is_err());
}
