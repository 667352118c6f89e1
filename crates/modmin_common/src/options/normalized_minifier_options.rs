use std::path::PathBuf;

use crate::{ModuleContainer, SharedMinifier};

#[derive(Clone)]
pub struct NormalizedMinifierOptions {
  pub minifier: SharedMinifier,
  pub source_map: bool,
  pub use_portable_modules: bool,
  pub module_container: ModuleContainer,
  pub cwd: PathBuf,
}

impl std::fmt::Debug for NormalizedMinifierOptions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("NormalizedMinifierOptions")
      .field("source_map", &self.source_map)
      .field("use_portable_modules", &self.use_portable_modules)
      .field("module_container", &self.module_container)
      .field("cwd", &self.cwd)
      .finish_non_exhaustive()
  }
}
