use modmin_common::{Comment, ModuleId, ModuleStats};
use modmin_sourcemap::{Source, SourceMapSource};

/// Everything known about one module of the compilation.
#[derive(Debug)]
pub struct ModuleRecord {
  pub id: ModuleId,
  pub identifier: String,
  /// The id the module was minified under, if `final_module_id` produced one.
  pub portable_id: Option<ModuleId>,
  pub skip_minification: bool,
  pub license_comments: Vec<Comment>,
  /// The final fragment. Stays `None` when minification or post-processing failed.
  pub source: Option<SourceMapSource>,
  pub minified_size: Option<usize>,
}

impl ModuleRecord {
  pub(crate) fn set_source(&mut self, source: SourceMapSource) {
    debug_assert!(self.source.is_none(), "module {} was minified twice", self.id);
    self.minified_size = Some(source.content().len());
    self.source = Some(source);
  }

  pub fn stats(&self) -> ModuleStats {
    ModuleStats {
      id: self.id.clone(),
      identifier: self.identifier.clone(),
      minified_size: self.minified_size,
    }
  }
}
