use modmin_common::ModuleId;
use modmin_utils::indexmap::FxIndexMap;

/// What a completion belongs to.
pub enum Dispatch {
  Module(PendingModule),
  Asset(PendingAsset),
}

pub struct PendingModule {
  pub id: ModuleId,
  pub identifier: String,
  /// The module text as rendered, before wrapping.
  pub code: String,
  pub name_for_map: Option<String>,
}

pub struct PendingAsset {
  pub filename: String,
  pub chunk: String,
  pub modules: Vec<ModuleId>,
  pub external_names: FxIndexMap<String, String>,
  pub name_for_map: Option<String>,
  /// Shown as the original text in the asset's source map.
  pub code_for_map: String,
  pub token: String,
  pub expects_hole: bool,
}
