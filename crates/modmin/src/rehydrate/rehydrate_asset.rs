use std::sync::LazyLock;

use modmin_common::{ModuleContainer, ModuleId};
use modmin_sourcemap::{ConcatSource, ReplaceSource, Source, SourceMapSource};
use modmin_utils::indexmap::FxIndexMap;
use regex::Regex;

use super::write_modules::write_modules;
use crate::types::{asset_record::AssetRecord, module_record::ModuleRecord};

static EXTERNAL_MODULE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"__EXTERNAL_MODULE_[A-Za-z0-9_$]+").unwrap());

/// `banner`, then the asset with its hole filled by the fragments of its modules, with external
/// placeholders renamed to their aliases.
pub fn rehydrate_asset(
  asset: &AssetRecord,
  modules: &FxIndexMap<ModuleId, ModuleRecord>,
  banner: &str,
  container: ModuleContainer,
) -> SourceMapSource {
  let mut output = ConcatSource::default();
  output.add_str(banner);
  match &asset.hole {
    Some(hole) => {
      output.add(&asset.source.slice(0..hole.start));
      write_modules(&mut output, &asset.filename, &asset.modules, modules, container);
      output.add(&asset.source.slice(hole.end..asset.source.byte_len()));
    }
    None => output.add(&asset.source),
  }
  rename_externals(output.finish(), asset)
}

fn rename_externals(source: SourceMapSource, asset: &AssetRecord) -> SourceMapSource {
  let renames = EXTERNAL_MODULE_RE
    .find_iter(source.content())
    .filter_map(|found| match asset.external_names.get(found.as_str()) {
      Some(alias) => Some((found.range(), alias.clone())),
      None => {
        tracing::error!(
          external = found.as_str(),
          asset = %asset.filename,
          "unknown external module"
        );
        None
      }
    })
    .collect::<Vec<_>>();
  if renames.is_empty() {
    return source;
  }

  let mut source = ReplaceSource::new(source);
  for (range, alias) in renames {
    source.replace(range.start, range.end, alias);
  }
  source.into_source()
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn module(id: u32, code: &str) -> (ModuleId, ModuleRecord) {
    let record = ModuleRecord {
      id: ModuleId::from(id),
      identifier: format!("./{id}.js"),
      portable_id: Some(ModuleId::from(id)),
      skip_minification: false,
      license_comments: vec![],
      source: Some(SourceMapSource::raw(code)),
      minified_size: Some(code.len()),
    };
    (ModuleId::from(id), record)
  }

  #[test]
  fn fills_the_hole_and_renames_externals() {
    let code =
      "define([\"react\"],function(__EXTERNAL_MODULE_react__){return run(__CHUNK_MODULES__)});";
    let start = code.find("__CHUNK_MODULES__").unwrap();
    let asset = AssetRecord {
      filename: "main.js".to_string(),
      source: SourceMapSource::raw(code),
      hole: Some(start..start + "__CHUNK_MODULES__".len()),
      modules: vec![ModuleId::from(0), ModuleId::from(1)],
      chunk: "main".to_string(),
      external_names: [("__EXTERNAL_MODULE_react__".to_string(), "c".to_string())]
        .into_iter()
        .collect(),
    };
    let modules = [
      module(0, "function(e,t,n){n(1)}"),
      module(1, "function(e){e.exports=__EXTERNAL_MODULE_react__}"),
    ]
    .into_iter()
    .collect();

    let output = rehydrate_asset(&asset, &modules, "/*! banner */\n", ModuleContainer::Auto);
    assert_eq!(
      output.content(),
      "/*! banner */\ndefine([\"react\"],function(c){return \
       run([function(e,t,n){n(1)},function(e){e.exports=c}])});"
    );
  }

  #[test]
  fn assets_without_a_hole_are_copied() {
    let asset = AssetRecord {
      filename: "style.css".to_string(),
      source: SourceMapSource::raw("a{color:red}"),
      hole: None,
      modules: vec![],
      chunk: "main".to_string(),
      external_names: FxIndexMap::default(),
    };
    let output = rehydrate_asset(&asset, &FxIndexMap::default(), "", ModuleContainer::Concatenated);
    assert_eq!(output.content(), "a{color:red}");
  }
}
