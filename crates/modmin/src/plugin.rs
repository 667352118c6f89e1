use modmin_common::{BuildInfo, ModuleMinifierOptions};

use crate::{
  hooks::MinifierHooks, rehydrate::default_rehydrate_assets, MinifierCompilation,
  PortableModuleIds,
};

pub(crate) const PLUGIN_NAME: &str = "ModuleMinifierPlugin";

/// Minifies code one module at a time instead of one asset at a time, so unchanged modules keep
/// their fingerprint and their minified text can be reused.
pub struct ModuleMinifierPlugin {
  hooks: MinifierHooks,
  options: ModuleMinifierOptions,
  portable_ids: Option<PortableModuleIds>,
}

impl ModuleMinifierPlugin {
  pub fn new(options: ModuleMinifierOptions) -> Self {
    let mut hooks = MinifierHooks::default();

    let portable_ids = options.use_portable_modules.then(|| {
      let portable_ids = PortableModuleIds::default();
      portable_ids.apply(&mut hooks);
      portable_ids
    });

    hooks.rehydrate_assets.tap_sync(PLUGIN_NAME, default_rehydrate_assets);

    Self { hooks, options, portable_ids }
  }

  pub fn hooks(&self) -> &MinifierHooks {
    &self.hooks
  }

  pub fn hooks_mut(&mut self) -> &mut MinifierHooks {
    &mut self.hooks
  }

  pub fn portable_ids(&self) -> Option<&PortableModuleIds> {
    self.portable_ids.as_ref()
  }

  /// Starts a build. Only one compilation should be live at a time when portable ids are on,
  /// since they share the plugin's id table.
  pub fn compilation(&self, build: &BuildInfo) -> MinifierCompilation<'_> {
    let options = self.options.normalize(build);
    tracing::debug!(?options, "starting module minifier compilation");
    if let Some(portable_ids) = &self.portable_ids {
      portable_ids.reset();
    }
    MinifierCompilation::new(&self.hooks, options, self.portable_ids.as_ref())
  }
}
