use std::ops::Range;

use modmin_common::ModuleId;
use modmin_sourcemap::SourceMapSource;
use modmin_utils::indexmap::FxIndexMap;

/// A minified chunk file waiting for its modules.
#[derive(Debug)]
pub struct AssetRecord {
  pub filename: String,
  pub source: SourceMapSource,
  /// Byte range of the modules placeholder in `source`. `None` for files without one.
  pub hole: Option<Range<usize>>,
  /// Ids of the chunk's modules, sorted.
  pub modules: Vec<ModuleId>,
  /// Empty for files outside any chunk.
  pub chunk: String,
  /// External placeholder name to the short alias it is rewritten to.
  pub external_names: FxIndexMap<String, String>,
}
