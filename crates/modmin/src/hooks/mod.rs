mod async_series_waterfall_hook;
mod sync_waterfall_hook;
mod tap;

use modmin_common::ModuleId;
use modmin_sourcemap::ReplaceSource;

pub use self::{
  async_series_waterfall_hook::AsyncSeriesWaterfallHook, sync_waterfall_hook::SyncWaterfallHook,
  tap::TapOptions,
};
use crate::types::dehydrated_assets::{DehydratedAssets, RehydrateContext};

#[derive(Default)]
pub struct MinifierHooks {
  /// Maps a module's compilation id to the id it is minified under. `None` sends the module
  /// through unminified.
  pub final_module_id: SyncWaterfallHook<Option<ModuleId>, ()>,
  /// Runs over every minified fragment. The context is the module identifier or the asset name.
  pub post_process_code_fragment: SyncWaterfallHook<ReplaceSource, str>,
  /// Runs once after every fragment has been minified and writes the final assets.
  pub rehydrate_assets: AsyncSeriesWaterfallHook<DehydratedAssets, RehydrateContext>,
}
