use modmin_common::ChunkInfo;
use modmin_error::MinifyError;

use super::MinifierCompilation;
use crate::ChunkModulesHole;

impl MinifierCompilation<'_> {
  /// Called once the host has rendered every module of `chunk`. Returns the hole to put into the
  /// chunk's template where the module table would go.
  pub fn dehydrate_chunk(&mut self, chunk: &ChunkInfo) -> ChunkModulesHole {
    for module in &chunk.modules {
      if module.id.as_ref().is_some_and(|id| self.submitted.contains(id)) {
        continue;
      }
      let warning = MinifyError::UnsubmittedModule {
        chunk: chunk.id.clone(),
        module: module.id.as_ref().map_or_else(|| "null".to_string(), ToString::to_string),
        identifier: module.identifier.clone(),
      };
      tracing::warn!("{warning}");
      self.warnings.push(warning.into());
    }
    ChunkModulesHole::new()
  }
}
