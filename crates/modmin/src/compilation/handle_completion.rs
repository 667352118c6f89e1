use modmin_common::{MinificationResult, MinifiedCode, MODULE_WRAPPER_PREFIX, MODULE_WRAPPER_SUFFIX};
use modmin_error::MinifyError;
use modmin_sourcemap::{ReplaceSource, SourceMapSource};

use super::MinifierCompilation;
use crate::types::{
  asset_record::AssetRecord,
  dispatch::{PendingAsset, PendingModule},
};

impl MinifierCompilation<'_> {
  pub(crate) fn complete_module(&mut self, pending: PendingModule, result: MinificationResult) {
    let target = format!("module {} ({})", pending.id, pending.identifier);
    let minified = match result {
      Ok(minified) => minified,
      Err(err) => {
        tracing::error!(module = %pending.id, "{err:#}");
        self.errors.push(MinifyError::minifier(target, err).into());
        return;
      }
    };

    match self.unwrap_module(&pending, minified) {
      Ok(source) => {
        if let Some(record) = self.modules.get_mut(&pending.id) {
          record.set_source(source);
        }
      }
      Err(err) => self.errors.push(MinifyError::post_processing(target, err).into()),
    }
  }

  /// Strips the wrapper call off a minified module and post-processes what is left.
  fn unwrap_module(
    &self,
    pending: &PendingModule,
    minified: MinifiedCode,
  ) -> anyhow::Result<SourceMapSource> {
    let MinifiedCode { mut code, map } = minified;
    code.truncate(code.trim_end().len());

    let len = code.len();
    if len < MODULE_WRAPPER_PREFIX.len() + MODULE_WRAPPER_SUFFIX.len()
      || !code.starts_with(MODULE_WRAPPER_PREFIX)
      || !code.ends_with(MODULE_WRAPPER_SUFFIX)
    {
      anyhow::bail!(
        "the minified code lost its `{MODULE_WRAPPER_PREFIX}...{MODULE_WRAPPER_SUFFIX}` wrapper"
      );
    }

    let mut source = SourceMapSource::new(code, map.filter(|_| self.options.source_map));
    if let Some(name) = &pending.name_for_map {
      // The map shows a readable header instead of the wrapper call.
      let original = format!("// {}\n{}\n", pending.identifier, pending.code);
      source = source.with_original(name, &original);
    }

    let mut unwrapped = ReplaceSource::new(source);
    unwrapped.replace(0, MODULE_WRAPPER_PREFIX.len(), "");
    unwrapped.replace(len - MODULE_WRAPPER_SUFFIX.len(), len, "");

    Ok(self.hooks.post_process_code_fragment.call(unwrapped, &pending.identifier)?.into_source())
  }

  pub(crate) fn complete_asset(&mut self, pending: PendingAsset, result: MinificationResult) {
    let MinifiedCode { code, map } = match result {
      Ok(minified) => minified,
      Err(err) => {
        tracing::error!(file = %pending.filename, "{err:#}");
        self.errors.push(MinifyError::minifier(format!("asset {}", pending.filename), err).into());
        return;
      }
    };

    let mut source = SourceMapSource::new(code, map.filter(|_| self.options.source_map));
    if let Some(name) = &pending.name_for_map {
      source = source.with_original(name, &pending.code_for_map);
    }
    let Some(source) = self.post_process(ReplaceSource::new(source), &pending.filename) else {
      return;
    };

    self.insert_asset(
      AssetRecord {
        filename: pending.filename,
        source,
        hole: None,
        modules: pending.modules,
        chunk: pending.chunk,
        external_names: pending.external_names,
      },
      &pending.token,
      pending.expects_hole,
    );
  }
}
