use std::fmt;

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

/// The id a module has in the current compilation. Hosts number their modules, or name them
/// when ids are derived from paths.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleId {
  Number(u32),
  String(ArcStr),
}

impl ModuleId {
  pub fn is_string(&self) -> bool {
    matches!(self, Self::String(_))
  }

  /// The id as a JS expression: numbers stay bare, strings are quoted and escaped.
  pub fn to_json(&self) -> String {
    match self {
      Self::Number(id) => id.to_string(),
      Self::String(id) => serde_json::Value::from(id.as_str()).to_string(),
    }
  }
}

impl fmt::Display for ModuleId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Number(id) => id.fmt(f),
      Self::String(id) => f.write_str(id),
    }
  }
}

impl From<u32> for ModuleId {
  fn from(value: u32) -> Self {
    Self::Number(value)
  }
}

impl From<&str> for ModuleId {
  fn from(value: &str) -> Self {
    Self::String(value.into())
  }
}

impl From<String> for ModuleId {
  fn from(value: String) -> Self {
    Self::String(value.into())
  }
}

/// Sorts numerically when every id is a number, otherwise by the text of each id.
pub fn sort_module_ids(ids: &mut [ModuleId]) {
  if ids.iter().any(ModuleId::is_string) {
    ids.sort_by_cached_key(ToString::to_string);
  } else {
    ids.sort_by_key(|id| match id {
      ModuleId::Number(id) => *id,
      ModuleId::String(_) => u32::MAX,
    });
  }
}

#[test]
fn test_sort_module_ids() {
  let mut ids = vec![ModuleId::from(10), ModuleId::from(2), ModuleId::from(33)];
  sort_module_ids(&mut ids);
  assert_eq!(ids, vec![ModuleId::from(2), ModuleId::from(10), ModuleId::from(33)]);

  let mut ids =
    vec![ModuleId::from(10), ModuleId::from(2), ModuleId::from("b"), ModuleId::from("a")];
  sort_module_ids(&mut ids);
  assert_eq!(
    ids.iter().map(ToString::to_string).collect::<Vec<_>>(),
    vec!["10", "2", "a", "b"]
  );
}

#[test]
fn test_module_id_json() {
  assert_eq!(ModuleId::from(7).to_json(), "7");
  assert_eq!(ModuleId::from("./src/a\".js").to_json(), r#""./src/a\".js""#);
  let ids: Vec<ModuleId> = serde_json::from_str(r#"[1, "b"]"#).unwrap();
  assert_eq!(ids, vec![ModuleId::from(1), ModuleId::from("b")]);
}
