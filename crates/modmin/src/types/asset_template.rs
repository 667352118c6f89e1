/// Proof that a chunk went through dehydration. Only
/// [`MinifierCompilation::dehydrate_chunk`](crate::MinifierCompilation::dehydrate_chunk) hands
/// these out, so a template can't carry a hole for modules that were never collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkModulesHole(());

impl ChunkModulesHole {
  pub(crate) fn new() -> Self {
    Self(())
  }
}

/// A rendered chunk file, with the place where its modules go kept as a typed hole instead of a
/// magic string.
#[derive(Debug, Clone)]
pub enum AssetTemplate {
  Text(String),
  Dehydrated { prefix: String, hole: ChunkModulesHole, suffix: String },
}

impl AssetTemplate {
  pub fn dehydrated(
    prefix: impl Into<String>,
    hole: ChunkModulesHole,
    suffix: impl Into<String>,
  ) -> Self {
    Self::Dehydrated { prefix: prefix.into(), hole, suffix: suffix.into() }
  }

  pub fn has_hole(&self) -> bool {
    matches!(self, Self::Dehydrated { .. })
  }

  pub(crate) fn contains(&self, needle: &str) -> bool {
    match self {
      Self::Text(text) => text.contains(needle),
      Self::Dehydrated { prefix, suffix, .. } => prefix.contains(needle) || suffix.contains(needle),
    }
  }

  /// The template as text, with `token` standing in for the hole.
  pub(crate) fn render(self, token: &str) -> String {
    match self {
      Self::Text(text) => text,
      Self::Dehydrated { prefix, suffix, .. } => {
        let mut code = String::with_capacity(prefix.len() + token.len() + suffix.len());
        code.push_str(&prefix);
        code.push_str(token);
        code.push_str(&suffix);
        code
      }
    }
  }
}
