mod constants;
mod minifier;
mod options;
mod types;

pub use crate::{
  constants::*,
  minifier::{
    CompletionCallback, MinificationRequest, MinificationResult, MinifiedCode, MinifierLease,
    ModuleMinifier, SharedMinifier,
  },
  options::{
    build_info::{BuildInfo, BuildMode, Devtool},
    module_container::ModuleContainer,
    normalized_minifier_options::NormalizedMinifierOptions,
    ModuleMinifierOptions,
  },
  types::{
    chunk_info::{ChunkInfo, ChunkModule},
    comment::{Comment, CommentKind},
    fingerprint::Fingerprint,
    module_id::{sort_module_ids, ModuleId},
    module_stats::ModuleStats,
    output_asset::OutputAsset,
    rendered_module::RenderedModule,
  },
};
