use modmin_common::{
  Fingerprint, MinificationRequest, RenderedModule, MODULE_PLACEHOLDER, MODULE_WRAPPER_PREFIX,
  MODULE_WRAPPER_SUFFIX,
};
use modmin_error::MinifyError;
use modmin_sourcemap::{ReplaceSource, SourceMapSource};

use super::MinifierCompilation;
use crate::types::{
  dispatch::{Dispatch, PendingModule},
  module_record::ModuleRecord,
};

impl MinifierCompilation<'_> {
  /// Takes over a rendered module and returns the placeholder to render in its place.
  ///
  /// The first call for an id records the module and sends it to the minifier (or straight
  /// through, when it skips minification or has no final id). Later calls for the same id only
  /// return the placeholder.
  pub fn minify_module(&mut self, module: &RenderedModule) -> &'static str {
    if !self.submitted.insert(module.id.clone()) {
      return MODULE_PLACEHOLDER;
    }

    let portable_id = match self.hooks.final_module_id.call(Some(module.id.clone()), &()) {
      Ok(id) => id,
      Err(err) => {
        self.errors.push(
          MinifyError::ModuleIdRemap { module: module.id.to_string(), source: err.into() }.into(),
        );
        None
      }
    };

    let mut record = ModuleRecord {
      id: module.id.clone(),
      identifier: module.identifier.clone(),
      portable_id: portable_id.clone(),
      skip_minification: module.skip_minification,
      license_comments: self.license_comments.remove(&module.id).unwrap_or_default(),
      source: None,
      minified_size: None,
    };

    let Some(portable_id) = portable_id.filter(|_| !module.skip_minification) else {
      tracing::debug!(module = %module.id, "passing module through unminified");
      let source = ReplaceSource::new(SourceMapSource::raw(module.source.clone()));
      if let Some(source) = self.post_process(source, &module.identifier) {
        record.set_source(source);
      }
      self.modules.insert(module.id.clone(), record);
      return MODULE_PLACEHOLDER;
    };

    let wrapped = format!("{MODULE_WRAPPER_PREFIX}\n{}\n{MODULE_WRAPPER_SUFFIX}", module.source);
    let name_for_map = self.options.source_map.then(|| format!("(modules)/{portable_id}"));
    let request = MinificationRequest {
      fingerprint: Fingerprint::of(&wrapped),
      code: wrapped,
      name_for_map: name_for_map.clone(),
      externals: None,
    };
    tracing::debug!(module = %module.id, fingerprint = %request.fingerprint, "dispatching module");

    self.modules.insert(module.id.clone(), record);
    let on_complete = self.barrier.issue(Dispatch::Module(PendingModule {
      id: module.id.clone(),
      identifier: module.identifier.clone(),
      code: module.source.clone(),
      name_for_map,
    }));
    self.options.minifier.minify(request, on_complete);

    MODULE_PLACEHOLDER
  }
}
