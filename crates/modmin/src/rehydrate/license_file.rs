use std::path::Path;

use modmin_common::{Comment, ModuleId};
use modmin_sourcemap::SourceMapSource;
use modmin_utils::indexmap::{FxIndexMap, FxIndexSet};

use crate::types::{
  asset_record::AssetRecord, dehydrated_assets::RehydrateContext, module_record::ModuleRecord,
};

/// Emits `{file}.LICENSE.txt` with the license comments of the asset's modules and returns the
/// banner pointing at it. Returns an empty banner when no module has license comments.
pub fn generate_license_file_for_asset(
  asset: &AssetRecord,
  modules: &FxIndexMap<ModuleId, ModuleRecord>,
  context: &mut RehydrateContext,
) -> String {
  let comments = asset
    .modules
    .iter()
    .filter_map(|id| modules.get(id))
    .flat_map(|record| record.license_comments.iter().map(Comment::render))
    .collect::<FxIndexSet<_>>();
  if comments.is_empty() {
    return String::new();
  }

  let license_file = format!("{}.LICENSE.txt", asset.filename);
  let mut content = comments.into_iter().collect::<Vec<_>>().join("\n");
  content.push('\n');
  context.emit(&license_file, SourceMapSource::raw(content));

  let basename = Path::new(&license_file)
    .file_name()
    .map_or_else(|| license_file.clone(), |name| name.to_string_lossy().into_owned());
  format!("/*! For license information please see {basename} */\n")
}
