use phf::{phf_set, Set};

const LEADING_CHARACTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_$";
const TRAILING_CHARACTERS: &[u8] =
  b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_$0123456789";

static RESERVED_WORDS: Set<&'static str> = phf_set! {
  "as", "do", "if", "in", "is", "of",
  "for", "let", "new", "try", "var",
  "case", "else", "enum", "eval", "null", "this", "true", "void", "with",
  "async", "await", "break", "catch", "class", "const", "false", "super", "throw", "while", "yield",
  "delete", "export", "import", "public", "return", "static", "switch", "typeof",
  "default", "extends", "finally", "package", "private",
  "continue", "debugger", "function",
  "arguments", "interface", "protected",
  "implements", "instanceof",
  "undefined", "NaN", "Infinity",
};

fn identifier_for_ordinal(ordinal: usize) -> String {
  let leading_len = LEADING_CHARACTERS.len();
  if ordinal < leading_len {
    return char::from(LEADING_CHARACTERS[ordinal]).to_string();
  }
  let rest = ordinal - leading_len;
  let trailing_len = TRAILING_CHARACTERS.len();
  let mut prefix = identifier_for_ordinal(rest / trailing_len);
  prefix.push(char::from(TRAILING_CHARACTERS[rest % trailing_len]));
  prefix
}

/// Returns the `ordinal`-th short identifier in a fixed sequence (`a`, `b`, ..., `$`, `aa`, `ab`,
/// ...), skipping reserved words so every result is a valid binding name.
pub fn minified_identifier(ordinal: usize) -> String {
  (0..)
    .map(identifier_for_ordinal)
    .filter(|ident| !RESERVED_WORDS.contains(ident.as_str()))
    .nth(ordinal)
    .unwrap_or_default()
}

#[test]
fn test_minified_identifier() {
  assert_eq!(minified_identifier(0), "a");
  assert_eq!(minified_identifier(2), "c");
  assert_eq!(minified_identifier(53), "$");
  assert_eq!(minified_identifier(54), "aa");
  assert_eq!(minified_identifier(55), "ab");
}

#[test]
fn test_minified_identifier_skips_reserved_words() {
  let idents = (0..4000).map(minified_identifier).collect::<Vec<_>>();
  assert!(!idents.iter().any(|ident| ident == "do" || ident == "if" || ident == "in"));
  let unique = idents.iter().collect::<std::collections::HashSet<_>>();
  assert_eq!(unique.len(), idents.len());
}
