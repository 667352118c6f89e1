mod barrier;
mod compilation;
mod hooks;
mod plugin;
mod portable_ids;
mod rehydrate;
mod types;
mod utils;

pub use crate::{
  barrier::{BarrierState, CompletionBarrier},
  compilation::MinifierCompilation,
  hooks::{AsyncSeriesWaterfallHook, MinifierHooks, SyncWaterfallHook, TapOptions},
  plugin::ModuleMinifierPlugin,
  portable_ids::PortableModuleIds,
  rehydrate::{default_rehydrate_assets, generate_license_file_for_asset, rehydrate_asset},
  types::{
    asset_record::AssetRecord,
    asset_template::{AssetTemplate, ChunkModulesHole},
    dehydrated_assets::{DehydratedAssets, RehydrateContext},
    minify_output::MinifyOutput,
    module_record::ModuleRecord,
  },
};
pub use modmin_common::*;
pub use modmin_error::{BuildError, BuildResult, MinifyError};
pub use modmin_sourcemap::{ReplaceSource, Source, SourceMapSource};
