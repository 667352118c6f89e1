/// Turns any string into something usable as a JS identifier: characters outside `[A-Za-z0-9$]`
/// collapse into a single `_`, and a leading character that can't start an identifier becomes `_`.
pub fn to_identifier(str: &str) -> String {
  let mut sanitized = String::with_capacity(str.len());
  let mut chars = str.chars();

  match chars.next() {
    Some(char) if char.is_ascii_alphabetic() || matches!(char, '$' | '_') => sanitized.push(char),
    Some(_) => sanitized.push('_'),
    None => return sanitized,
  }

  for char in chars {
    if char.is_ascii_alphanumeric() || char == '$' {
      sanitized.push(char);
    } else if !sanitized.ends_with('_') {
      sanitized.push('_');
    }
  }
  sanitized
}

#[test]
fn test_to_identifier() {
  assert_eq!(to_identifier("react"), "react");
  assert_eq!(to_identifier("12"), "_2");
  assert_eq!(to_identifier("@scope/pkg-name"), "_scope_pkg_name");
  assert_eq!(to_identifier("a..b"), "a_b");
  assert_eq!(to_identifier(""), "");
}
