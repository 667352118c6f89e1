use base_encode::to_string;
use xxhash_rust::xxh3::xxh3_128;

const CHARACTERS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_";

/// Encodes the xxh3-128 digest of `input` with the first `base` characters of
/// `0-9a-zA-Z-_`, so base 16 is lowercase hex and base 36 stays lowercase alphanumeric.
pub fn xxhash_with_base(input: &[u8], base: u8) -> String {
  assert!((2..=64).contains(&base), "unsupported base {base}");
  let hash = xxh3_128(input).to_be_bytes();
  to_string(&hash, base, CHARACTERS).unwrap_or_default()
}

pub fn xxhash_hex(input: &[u8]) -> String {
  format!("{:032x}", xxh3_128(input))
}

#[test]
fn test_xxhash_hex() {
  assert_eq!(xxhash_hex(b"hello").len(), 32);
  assert_eq!(xxhash_hex(b"hello"), xxhash_hex(b"hello"));
  assert_ne!(xxhash_hex(b"hello"), xxhash_hex(b"hellp"));
}

#[test]
fn test_xxhash_with_base() {
  let base36 = xxhash_with_base(b"./src/index.js", 36);
  assert!(base36.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
  assert_eq!(base36, xxhash_with_base(b"./src/index.js", 36));
  assert_ne!(base36, xxhash_with_base(b"./src/index.ts", 36));
}
