use std::path::PathBuf;

use clap::Args;

use crate::types::module_container::ModuleContainer;

#[derive(Args)]
pub struct InputArgs {
  /// JSON description of the rendered modules and chunks.
  #[clap(long, short = 'm')]
  pub manifest: PathBuf,

  #[clap(long)]
  pub cwd: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd', default_value = "dist")]
  pub dir: PathBuf,

  #[clap(long)]
  pub silent: bool,
}

#[derive(Args)]
pub struct EnhanceArgs {
  #[clap(long)]
  pub source_map: Option<bool>,

  /// Minify modules under ids that don't change between builds.
  #[clap(long)]
  pub portable: bool,

  #[clap(long, default_value = "auto")]
  pub container: ModuleContainer,

  #[clap(long)]
  pub threads: Option<usize>,
}
