use modmin_common::{ModuleStats, OutputAsset};

#[derive(Debug, Default)]
pub struct MinifyOutput {
  pub assets: Vec<OutputAsset>,
  pub modules: Vec<ModuleStats>,
  pub errors: Vec<anyhow::Error>,
  pub warnings: Vec<anyhow::Error>,
}
