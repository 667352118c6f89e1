use modmin_common::{ModuleContainer, ModuleId, OutputAsset};
use modmin_sourcemap::SourceMapSource;
use modmin_utils::indexmap::FxIndexMap;

use super::{asset_record::AssetRecord, module_record::ModuleRecord};

/// All minified fragments of a compilation, before they are put back together.
#[derive(Debug, Default)]
pub struct DehydratedAssets {
  pub assets: FxIndexMap<String, AssetRecord>,
  pub modules: FxIndexMap<ModuleId, ModuleRecord>,
}

/// Where rehydration writes its results.
#[derive(Debug, Default)]
pub struct RehydrateContext {
  pub outputs: FxIndexMap<String, OutputAsset>,
  pub errors: Vec<anyhow::Error>,
  pub warnings: Vec<anyhow::Error>,
  pub source_map: bool,
  pub module_container: ModuleContainer,
}

impl RehydrateContext {
  pub fn emit(&mut self, filename: &str, source: SourceMapSource) {
    let (content, map) = source.into_parts();
    let map = map.filter(|_| self.source_map).map(|map| map.to_json_string());
    self
      .outputs
      .insert(filename.to_string(), OutputAsset { filename: filename.to_string(), content, map });
  }
}
