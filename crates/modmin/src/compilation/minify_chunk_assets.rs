use modmin_common::{
  sort_module_ids, ChunkInfo, Fingerprint, MinificationRequest, ModuleId,
  EXTERNAL_MODULE_TOKEN_PREFIX,
};
use modmin_error::MinifyError;
use modmin_sourcemap::{ReplaceSource, Source, SourceMapSource};
use modmin_utils::{
  indexmap::FxIndexMap, minified_identifier::minified_identifier, to_identifier::to_identifier,
};
use rustc_hash::FxHashSet;

use super::MinifierCompilation;
use crate::{
  types::{
    asset_record::AssetRecord,
    dispatch::{Dispatch, PendingAsset},
  },
  utils::{
    chunk_modules_token::chunk_modules_token, is_script_file::is_script_file,
    locate_hole::locate_hole,
  },
  AssetTemplate,
};

struct ChunkModules {
  ids: Vec<ModuleId>,
  externals: Vec<String>,
  external_names: FxIndexMap<String, String>,
}

impl ChunkModules {
  fn collect(chunk: &ChunkInfo) -> Self {
    let mut seen = FxHashSet::default();
    let mut ids = vec![];
    let mut externals = vec![];
    let mut external_names = FxIndexMap::default();
    for module in &chunk.modules {
      let Some(id) = &module.id else { continue };
      if !seen.insert(id) {
        continue;
      }
      ids.push(id.clone());
      if module.external {
        let key = format!("{EXTERNAL_MODULE_TOKEN_PREFIX}{}__", to_identifier(&id.to_string()));
        // Ordinals 0 and 1 belong to the `(module, exports)` parameters of the module function.
        let alias = minified_identifier(2 + externals.len());
        externals.push(key.clone());
        external_names.insert(key, alias);
      }
    }
    sort_module_ids(&mut ids);
    Self { ids, externals, external_names }
  }
}

impl MinifierCompilation<'_> {
  /// Minifies the rendered files of `chunks`. Script files go to the minifier whole, other
  /// files are only post-processed. Files a chunk lists that are missing from `templates` are
  /// skipped. Templates no chunk claims are emitted as they are.
  pub fn minify_chunk_assets(
    &mut self,
    chunks: &[ChunkInfo],
    mut templates: FxIndexMap<String, AssetTemplate>,
  ) {
    let token = chunk_modules_token(templates.values());

    for chunk in chunks {
      let ChunkModules { ids, externals, external_names } = ChunkModules::collect(chunk);

      for filename in &chunk.files {
        let Some(template) = templates.shift_remove(filename) else {
          tracing::debug!(
            chunk = %chunk.id,
            file = %filename,
            "no rendered template for chunk file"
          );
          continue;
        };
        let expects_hole = template.has_hole();
        let code = template.render(&token);

        if !is_script_file(filename) {
          let source = ReplaceSource::new(SourceMapSource::raw(code));
          let Some(source) = self.post_process(source, filename) else { continue };
          self.insert_asset(
            AssetRecord {
              filename: filename.clone(),
              source,
              hole: None,
              modules: ids.clone(),
              chunk: chunk.id.clone(),
              external_names: external_names.clone(),
            },
            &token,
            expects_hole,
          );
          continue;
        }

        let (name_for_map, code_for_map) = if self.options.source_map {
          // The map shows the chunk's module ids where the modules will be.
          let ids_json = serde_json::to_string_pretty(&ids).unwrap_or_default();
          (Some(format!("(chunks)/{filename}")), code.replacen(&token, &ids_json, 1))
        } else {
          (None, String::new())
        };
        let request = MinificationRequest {
          fingerprint: Fingerprint::of(&code),
          code,
          name_for_map: name_for_map.clone(),
          externals: Some(externals.clone()),
        };
        tracing::debug!(
          chunk = %chunk.id,
          file = %filename,
          fingerprint = %request.fingerprint,
          "dispatching asset"
        );

        let on_complete = self.barrier.issue(Dispatch::Asset(PendingAsset {
          filename: filename.clone(),
          chunk: chunk.id.clone(),
          modules: ids.clone(),
          external_names: external_names.clone(),
          name_for_map,
          code_for_map,
          token: token.clone(),
          expects_hole,
        }));
        self.options.minifier.minify(request, on_complete);
      }
    }

    for (filename, template) in templates {
      tracing::debug!(file = %filename, "keeping file outside of any chunk unchanged");
      let expects_hole = template.has_hole();
      let source = SourceMapSource::raw(template.render(&token));
      self.insert_asset(
        AssetRecord {
          filename,
          source,
          hole: None,
          modules: vec![],
          chunk: String::new(),
          external_names: FxIndexMap::default(),
        },
        &token,
        expects_hole,
      );
    }
  }

  /// Locates the hole in a finished asset and stores it.
  pub(crate) fn insert_asset(&mut self, mut asset: AssetRecord, token: &str, expects_hole: bool) {
    match locate_hole(asset.source.content(), token, expects_hole) {
      Ok(hole) => {
        asset.hole = hole;
        self.assets.insert(asset.filename.clone(), asset);
      }
      Err(err) => {
        self.errors.push(MinifyError::post_processing(&asset.filename, err).into());
      }
    }
  }
}
