use std::{path::Path, sync::Arc, sync::LazyLock};

use dashmap::DashMap;
use modmin_common::{ModuleId, MODULE_ID_TOKEN_PREFIX, STAGE_BEFORE};
use modmin_utils::xxhash::xxhash_with_base;
use regex::Regex;

use crate::{hooks::TapOptions, utils::stabilize_identifier::stabilize_identifier, MinifierHooks};

const PLUGIN_NAME: &str = "PortableMinifierModuleIdsPlugin";

static MODULE_ID_TOKEN_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#"['"]?(__MODULEID_[0-9a-z]+__)['"]?"#).unwrap());

#[derive(Default)]
struct PortableIdTable {
  by_module: DashMap<ModuleId, ModuleId>,
  by_portable: DashMap<String, ModuleId>,
}

/// Gives every module a token derived from its path instead of its compilation id.
///
/// Hosts render references to other modules with [`PortableModuleIds::reference`], so a module's
/// text, and therefore its fingerprint and minified output, no longer depends on how ids were
/// assigned in this particular build. The tokens are swapped for the real ids after
/// minification.
#[derive(Clone, Default)]
pub struct PortableModuleIds {
  table: Arc<PortableIdTable>,
}

impl PortableModuleIds {
  pub fn reset(&self) {
    self.table.by_module.clear();
    self.table.by_portable.clear();
  }

  /// Registers `id` and returns its portable token.
  pub fn assign(&self, id: &ModuleId, identifier: &str, cwd: &Path) -> ModuleId {
    let stable = stabilize_identifier(identifier, cwd);
    let token = format!("{MODULE_ID_TOKEN_PREFIX}{}__", xxhash_with_base(stable.as_bytes(), 36));
    if let Some(previous) = self.table.by_portable.insert(token.clone(), id.clone()) {
      if &previous != id {
        tracing::warn!(
          %previous,
          module = %id,
          identifier = %stable,
          "portable module id collision"
        );
      }
    }
    let token = ModuleId::from(token);
    self.table.by_module.insert(id.clone(), token.clone());
    token
  }

  /// The token to render in place of a reference to `id`.
  pub fn reference(&self, id: &ModuleId) -> Option<ModuleId> {
    self.table.by_module.get(id).map(|token| token.value().clone())
  }

  /// The compilation id a token stands for.
  pub fn resolve(&self, token: &str) -> Option<ModuleId> {
    self.table.by_portable.get(token).map(|id| id.value().clone())
  }

  pub fn apply(&self, hooks: &mut MinifierHooks) {
    let table = Arc::clone(&self.table);
    hooks.final_module_id.tap(PLUGIN_NAME, move |id, ()| {
      Ok(id.and_then(|id| table.by_module.get(&id).map(|token| token.value().clone())))
    });

    let table = Arc::clone(&self.table);
    hooks.post_process_code_fragment.tap(
      TapOptions::new(PLUGIN_NAME).with_stage(STAGE_BEFORE),
      move |mut source, context| {
        let replacements = MODULE_ID_TOKEN_RE
          .captures_iter(source.original())
          .filter_map(|captures| {
            let (whole, token) = (captures.get(0)?, captures.get(1)?);
            match table.by_portable.get(token.as_str()) {
              Some(id) => Some((whole.range(), id.to_json())),
              None => {
                tracing::error!(
                  token = token.as_str(),
                  context,
                  "missing module id for portable token"
                );
                None
              }
            }
          })
          .collect::<Vec<_>>();
        for (range, id) in replacements {
          source.replace(range.start, range.end, id);
        }
        Ok(source)
      },
    );
  }
}
