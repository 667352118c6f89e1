mod dehydrate_chunk;
mod handle_completion;
mod minify_chunk_assets;
mod minify_module;

use modmin_common::{Comment, ModuleId, MinifierLease, NormalizedMinifierOptions};
use modmin_error::{BuildResult, MinifyError};
use modmin_sourcemap::{ReplaceSource, SourceMapSource};
use modmin_utils::indexmap::FxIndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
  barrier::CompletionBarrier,
  types::{
    asset_record::AssetRecord,
    dehydrated_assets::{DehydratedAssets, RehydrateContext},
    dispatch::Dispatch,
    minify_output::MinifyOutput,
    module_record::ModuleRecord,
  },
  MinifierHooks, PortableModuleIds,
};

/// Per-build state of the module minifier.
///
/// The host drives it in build order: [`Self::minify_module`] for every rendered module,
/// [`Self::dehydrate_chunk`] for every rendered chunk, [`Self::minify_chunk_assets`] once with
/// all chunk files, then [`Self::finish`].
pub struct MinifierCompilation<'plugin> {
  pub(crate) hooks: &'plugin MinifierHooks,
  pub(crate) options: NormalizedMinifierOptions,
  pub(crate) portable_ids: Option<&'plugin PortableModuleIds>,
  pub(crate) lease: Option<Box<dyn MinifierLease>>,
  pub(crate) barrier: CompletionBarrier<Dispatch>,
  pub(crate) submitted: FxHashSet<ModuleId>,
  pub(crate) modules: FxIndexMap<ModuleId, ModuleRecord>,
  pub(crate) assets: FxIndexMap<String, AssetRecord>,
  pub(crate) license_comments: FxHashMap<ModuleId, Vec<Comment>>,
  pub(crate) errors: Vec<anyhow::Error>,
  pub(crate) warnings: Vec<anyhow::Error>,
}

impl<'plugin> MinifierCompilation<'plugin> {
  pub(crate) fn new(
    hooks: &'plugin MinifierHooks,
    options: NormalizedMinifierOptions,
    portable_ids: Option<&'plugin PortableModuleIds>,
  ) -> Self {
    let lease = options.minifier.acquire();
    Self {
      hooks,
      options,
      portable_ids,
      lease,
      barrier: CompletionBarrier::new(),
      submitted: FxHashSet::default(),
      modules: FxIndexMap::default(),
      assets: FxIndexMap::default(),
      license_comments: FxHashMap::default(),
      errors: vec![],
      warnings: vec![],
    }
  }

  pub fn options(&self) -> &NormalizedMinifierOptions {
    &self.options
  }

  pub fn errors(&self) -> &[anyhow::Error] {
    &self.errors
  }

  pub fn warnings(&self) -> &[anyhow::Error] {
    &self.warnings
  }

  pub fn pending(&self) -> usize {
    self.barrier.pending()
  }

  /// Keeps the license comments among `comments`, found while parsing module `id`. They are
  /// emitted into the license file of every script asset containing the module.
  pub fn extract_license_comments(
    &mut self,
    id: &ModuleId,
    comments: impl IntoIterator<Item = Comment>,
  ) {
    let licenses = comments.into_iter().filter(Comment::is_license);
    match self.modules.get_mut(id) {
      Some(record) => record.license_comments.extend(licenses),
      None => self.license_comments.entry(id.clone()).or_default().extend(licenses),
    }
  }

  /// Registers a portable token for `id` when portable ids are enabled.
  pub fn assign_portable_id(&self, id: &ModuleId, identifier: &str) -> Option<ModuleId> {
    self.portable_ids.map(|ids| ids.assign(id, identifier, &self.options.cwd))
  }

  /// The expression a module should use to refer to module `id`.
  pub fn module_reference(&self, id: &ModuleId) -> String {
    self
      .portable_ids
      .and_then(|ids| ids.reference(id))
      .map_or_else(|| id.to_json(), |token| token.to_string())
  }

  /// Runs the post-processing hook, recording a failure against `context`.
  pub(crate) fn post_process(
    &mut self,
    source: ReplaceSource,
    context: &str,
  ) -> Option<SourceMapSource> {
    match self.hooks.post_process_code_fragment.call(source, context) {
      Ok(source) => Some(source.into_source()),
      Err(err) => {
        self.errors.push(MinifyError::post_processing(context, err).into());
        None
      }
    }
  }

  /// Waits for every outstanding minification, releases the minifier and rehydrates the assets.
  pub async fn finish(mut self) -> BuildResult<MinifyOutput> {
    self.barrier.close();
    while let Some((dispatch, result)) = self.barrier.next_completion().await {
      match dispatch {
        Dispatch::Module(pending) => self.complete_module(pending, result),
        Dispatch::Asset(pending) => self.complete_asset(pending, result),
      }
    }

    if let Some(lease) = self.lease.take() {
      lease.release().await.map_err(MinifyError::teardown)?;
    }

    let Self { hooks, options, modules, assets, errors, warnings, .. } = self;
    tracing::debug!(modules = modules.len(), assets = assets.len(), "rehydrating assets");

    let mut context = RehydrateContext {
      outputs: FxIndexMap::default(),
      errors,
      warnings,
      source_map: options.source_map,
      module_container: options.module_container,
    };
    let dehydrated =
      hooks.rehydrate_assets.call(DehydratedAssets { assets, modules }, &mut context).await?;

    Ok(MinifyOutput {
      assets: context.outputs.into_values().collect(),
      modules: dehydrated.modules.values().map(ModuleRecord::stats).collect(),
      errors: context.errors,
      warnings: context.warnings,
    })
  }
}
