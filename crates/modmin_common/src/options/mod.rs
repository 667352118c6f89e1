pub mod build_info;
pub mod module_container;
pub mod normalized_minifier_options;

use std::sync::Arc;

use crate::{
  BuildInfo, BuildMode, Devtool, ModuleContainer, ModuleMinifier, NormalizedMinifierOptions,
  SharedMinifier,
};

#[derive(Clone)]
pub struct ModuleMinifierOptions {
  pub minifier: SharedMinifier,
  /// Overrides the guess made from the build's devtool and mode.
  pub source_map: Option<bool>,
  pub use_portable_modules: bool,
  pub module_container: Option<ModuleContainer>,
}

impl ModuleMinifierOptions {
  pub fn new(minifier: impl ModuleMinifier + 'static) -> Self {
    Self {
      minifier: Arc::new(minifier),
      source_map: None,
      use_portable_modules: false,
      module_container: None,
    }
  }

  pub fn normalize(&self, build: &BuildInfo) -> NormalizedMinifierOptions {
    let source_map = self.source_map.unwrap_or_else(|| match &build.devtool {
      Devtool::Named(devtool) => devtool.ends_with("source-map"),
      Devtool::Disabled => false,
      Devtool::Unset => build.mode == BuildMode::Production,
    });
    NormalizedMinifierOptions {
      minifier: Arc::clone(&self.minifier),
      source_map,
      use_portable_modules: self.use_portable_modules,
      module_container: self.module_container.unwrap_or_default(),
      cwd: build.cwd.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{CompletionCallback, MinificationRequest};

  struct Noop;

  impl ModuleMinifier for Noop {
    fn minify(&self, _request: MinificationRequest, _on_complete: CompletionCallback) {}
  }

  fn source_map_for(source_map: Option<bool>, mode: BuildMode, devtool: Devtool) -> bool {
    let mut options = ModuleMinifierOptions::new(Noop);
    options.source_map = source_map;
    options.normalize(&BuildInfo { mode, devtool, ..BuildInfo::default() }).source_map
  }

  #[test]
  fn source_map_guess() {
    let named = |name: &str| Devtool::Named(name.to_string());
    assert!(source_map_for(Some(true), BuildMode::Development, Devtool::Disabled));
    assert!(!source_map_for(Some(false), BuildMode::Production, named("source-map")));
    assert!(source_map_for(None, BuildMode::Development, named("cheap-module-source-map")));
    assert!(!source_map_for(None, BuildMode::Production, named("eval")));
    assert!(source_map_for(None, BuildMode::Production, Devtool::Unset));
    assert!(!source_map_for(None, BuildMode::Production, Devtool::Disabled));
    assert!(!source_map_for(None, BuildMode::Development, Devtool::Unset));
  }
}
