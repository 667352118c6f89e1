use modmin_common::CHUNK_MODULES_TOKEN;

use crate::AssetTemplate;

/// A placeholder for chunk holes that doesn't occur in any of `templates`.
pub fn chunk_modules_token<'a>(
  templates: impl Iterator<Item = &'a AssetTemplate> + Clone,
) -> String {
  let mut token = CHUNK_MODULES_TOKEN.to_string();
  let mut suffix = 0u32;
  while templates.clone().any(|template| template.contains(&token)) {
    token = format!("__CHUNK_MODULES_{suffix}__");
    suffix += 1;
  }
  token
}

#[test]
fn test_chunk_modules_token() {
  let plain = [AssetTemplate::Text("var a = 1;".to_string())];
  assert_eq!(chunk_modules_token(plain.iter()), "__CHUNK_MODULES__");

  let clashing = [
    AssetTemplate::Text("'__CHUNK_MODULES__'".to_string()),
    AssetTemplate::Text("'__CHUNK_MODULES_0__'".to_string()),
  ];
  assert_eq!(chunk_modules_token(clashing.iter()), "__CHUNK_MODULES_1__");
}
