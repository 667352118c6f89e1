use crate::ModuleId;

/// A module's generated code as handed over by the host during chunk rendering.
#[derive(Debug, Clone)]
pub struct RenderedModule {
  pub id: ModuleId,
  /// Human readable name, usually the cwd-relative resource path.
  pub identifier: String,
  pub source: String,
  pub skip_minification: bool,
}

impl RenderedModule {
  pub fn new(
    id: impl Into<ModuleId>,
    identifier: impl Into<String>,
    source: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      identifier: identifier.into(),
      source: source.into(),
      skip_minification: false,
    }
  }
}
