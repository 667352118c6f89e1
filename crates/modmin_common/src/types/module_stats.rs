use crate::ModuleId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStats {
  pub id: ModuleId,
  pub identifier: String,
  /// UTF-8 byte length of the final fragment. `None` when minification failed.
  pub minified_size: Option<usize>,
}
