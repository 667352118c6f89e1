mod license_file;
mod rehydrate_asset;
mod write_modules;

pub use self::{license_file::generate_license_file_for_asset, rehydrate_asset::rehydrate_asset};
use crate::{
  types::dehydrated_assets::{DehydratedAssets, RehydrateContext},
  utils::is_script_file::is_script_file,
};

/// Writes every dehydrated asset to the outputs with its modules put back in.
pub fn default_rehydrate_assets(
  dehydrated: DehydratedAssets,
  context: &mut RehydrateContext,
) -> anyhow::Result<DehydratedAssets> {
  for (filename, asset) in &dehydrated.assets {
    let banner = if is_script_file(filename) {
      generate_license_file_for_asset(asset, &dehydrated.modules, context)
    } else {
      String::new()
    };
    let output = rehydrate_asset(asset, &dehydrated.modules, &banner, context.module_container);
    context.emit(filename, output);
  }
  Ok(dehydrated)
}
