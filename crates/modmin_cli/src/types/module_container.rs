use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum ModuleContainer {
  Concatenated,
  Object,
  Auto,
}

impl From<ModuleContainer> for modmin::ModuleContainer {
  fn from(value: ModuleContainer) -> Self {
    match value {
      ModuleContainer::Concatenated => modmin::ModuleContainer::Concatenated,
      ModuleContainer::Object => modmin::ModuleContainer::ObjectLiteral,
      ModuleContainer::Auto => modmin::ModuleContainer::Auto,
    }
  }
}
