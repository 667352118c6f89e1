use std::path::PathBuf;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
  Development,
  #[default]
  Production,
  None,
}

/// The host's source map setting. `Disabled` is an explicit opt-out, which differs from leaving it
/// unset in production builds.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Devtool {
  #[default]
  Unset,
  Disabled,
  Named(String),
}

/// Facts about the surrounding build that options are normalised against.
#[derive(Debug, Default, Clone)]
pub struct BuildInfo {
  pub mode: BuildMode,
  pub devtool: Devtool,
  pub cwd: PathBuf,
}
