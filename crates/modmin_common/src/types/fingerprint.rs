use std::fmt;

use modmin_utils::xxhash::xxhash_hex;

/// Content hash of a code fragment. Equal text always yields an equal fingerprint, which is what
/// lets minifier services cache results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
  pub fn of(code: &str) -> Self {
    Self(xxhash_hex(code.as_bytes()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Fingerprint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
