#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub filename: String,
  pub content: String,
  /// Source map as JSON, when maps are enabled and the asset has one.
  pub map: Option<String>,
}

impl OutputAsset {
  pub fn filename(&self) -> &str {
    &self.filename
  }

  pub fn content_as_bytes(&self) -> &[u8] {
    self.content.as_bytes()
  }
}
