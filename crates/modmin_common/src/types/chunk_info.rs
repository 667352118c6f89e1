use serde::Deserialize;

use crate::ModuleId;

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkModule {
  /// Modules without an id can't be rendered and are reported when the chunk is dehydrated.
  pub id: Option<ModuleId>,
  pub identifier: String,
  #[serde(default)]
  pub external: bool,
}

#[derive(Debug, Clone)]
pub struct ChunkInfo {
  pub id: String,
  pub files: Vec<String>,
  pub modules: Vec<ChunkModule>,
}
