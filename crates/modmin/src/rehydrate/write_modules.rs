use std::sync::LazyLock;

use modmin_common::{ModuleContainer, ModuleId};
use modmin_sourcemap::{ConcatSource, SourceMapSource};
use modmin_utils::indexmap::FxIndexMap;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::types::module_record::ModuleRecord;

const EMPTY_FUNCTION: &str = "function(){}";

static VALID_ID_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Writes the fragments of `ids` into `output` in the shape `container` asks for.
pub fn write_modules(
  output: &mut ConcatSource,
  filename: &str,
  ids: &[ModuleId],
  modules: &FxIndexMap<ModuleId, ModuleRecord>,
  container: ModuleContainer,
) {
  let writer = ModuleWriter { filename, modules };
  match container {
    ModuleContainer::Concatenated => {
      for id in ids {
        if let Some(fragment) = writer.fragment(id) {
          output.add(fragment);
        }
      }
    }
    ModuleContainer::ObjectLiteral => writer.write_object(output, ids),
    ModuleContainer::Auto => match array_bounds(ids) {
      Some(bounds) => writer.write_array(output, ids, bounds),
      None => writer.write_object(output, ids),
    },
  }
}

struct ModuleWriter<'a> {
  filename: &'a str,
  modules: &'a FxIndexMap<ModuleId, ModuleRecord>,
}

impl<'a> ModuleWriter<'a> {
  fn fragment(&self, id: &ModuleId) -> Option<&'a SourceMapSource> {
    let fragment = self.modules.get(id).and_then(|record| record.source.as_ref());
    if fragment.is_none() {
      tracing::error!(
        module = %id,
        asset = self.filename,
        "module not found in the minified module map"
      );
    }
    fragment
  }

  fn write_entry(&self, output: &mut ConcatSource, id: &ModuleId) {
    match self.fragment(id) {
      Some(fragment) => output.add(fragment),
      None => output.add_str(EMPTY_FUNCTION),
    }
  }

  fn write_object(&self, output: &mut ConcatSource, ids: &[ModuleId]) {
    output.add_str("{");
    for (index, id) in ids.iter().enumerate() {
      let key = match id {
        ModuleId::String(name) if VALID_ID_RE.is_match(name) => name.to_string(),
        _ => id.to_json(),
      };
      output.add_str(&format!("{}{key}:", if index == 0 { "" } else { "," }));
      self.write_entry(output, id);
    }
    output.add_str("}");
  }

  /// `[a,,b]` or `Array(n).concat([a,,b])`, indexed by numeric module id.
  fn write_array(&self, output: &mut ConcatSource, ids: &[ModuleId], (min, max): (u32, u32)) {
    output.add_str(&if min == 0 { "[".to_string() } else { format!("Array({min}).concat([") });
    let present = ids
      .iter()
      .filter_map(|id| match id {
        ModuleId::Number(id) => Some(*id),
        ModuleId::String(_) => None,
      })
      .collect::<FxHashSet<_>>();
    for index in min..=max {
      if index > min {
        output.add_str(",");
      }
      if present.contains(&index) {
        self.write_entry(output, &ModuleId::Number(index));
      }
    }
    output.add_str(if min == 0 { "]" } else { "])" });
  }
}

/// Picks the array form when every id is a number and the array is no longer than the object
/// literal would be.
fn array_bounds(ids: &[ModuleId]) -> Option<(u32, u32)> {
  let numbers = ids
    .iter()
    .map(|id| match id {
      ModuleId::Number(id) => Some(*id),
      ModuleId::String(_) => None,
    })
    .collect::<Option<Vec<_>>>()?;
  let max = *numbers.iter().max()?;
  let mut min = *numbers.iter().min()?;

  let digits = |n: u32| n.to_string().len();
  // A handful of leading holes is shorter than `Array(n).concat(...)`.
  if (min as usize) < 16 + digits(min) {
    min = 0;
  }
  let object_overhead = numbers.iter().map(|&id| digits(id) + 2).sum::<usize>() - 1;
  let array_overhead =
    if min == 0 { max as usize } else { 16 + digits(min) + max as usize };
  (array_overhead < object_overhead).then_some((min, max))
}

#[cfg(test)]
mod tests {
  use modmin_sourcemap::Source;
  use pretty_assertions::assert_eq;

  use super::*;

  fn records(fragments: &[(ModuleId, &str)]) -> FxIndexMap<ModuleId, ModuleRecord> {
    fragments
      .iter()
      .map(|(id, code)| {
        let record = ModuleRecord {
          id: id.clone(),
          identifier: format!("./{id}.js"),
          portable_id: Some(id.clone()),
          skip_minification: false,
          license_comments: vec![],
          source: Some(SourceMapSource::raw(*code)),
          minified_size: Some(code.len()),
        };
        (id.clone(), record)
      })
      .collect()
  }

  fn write(
    ids: &[ModuleId],
    modules: &FxIndexMap<ModuleId, ModuleRecord>,
    container: ModuleContainer,
  ) -> String {
    let mut output = ConcatSource::default();
    write_modules(&mut output, "main.js", ids, modules, container);
    output.finish().content().to_string()
  }

  #[test]
  fn writes_each_container_shape() {
    let ids = [ModuleId::from(0), ModuleId::from(2), ModuleId::from(3)];
    let modules =
      records(&[(ModuleId::from(0), "function(){a}"), (ModuleId::from(2), "function(){c}")]);

    assert_eq!(write(&ids, &modules, ModuleContainer::Concatenated), "function(){a}function(){c}");
    assert_eq!(
      write(&ids, &modules, ModuleContainer::ObjectLiteral),
      "{0:function(){a},2:function(){c},3:function(){}}"
    );
    assert_eq!(
      write(&ids, &modules, ModuleContainer::Auto),
      "[function(){a},,function(){c},function(){}]"
    );
  }

  #[test]
  fn keeps_fragments_of_unordered_ids() {
    let ids = [ModuleId::from(3), ModuleId::from(1), ModuleId::from(2)];
    let modules =
      records(&[(ModuleId::from(1), "A"), (ModuleId::from(2), "B"), (ModuleId::from(3), "C")]);

    assert_eq!(write(&ids, &modules, ModuleContainer::Concatenated), "CAB");
    assert_eq!(write(&ids, &modules, ModuleContainer::ObjectLiteral), "{3:C,1:A,2:B}");
    assert_eq!(write(&ids, &modules, ModuleContainer::Auto), "[,A,B,C]");
  }

  #[test]
  fn quotes_ids_that_are_not_identifiers() {
    let ids = [ModuleId::from("lodash"), ModuleId::from("./src/a.js")];
    let modules = records(&[
      (ModuleId::from("lodash"), "function(){}"),
      (ModuleId::from("./src/a.js"), "function(){b}"),
    ]);
    assert_eq!(
      write(&ids, &modules, ModuleContainer::Auto),
      r#"{lodash:function(){},"./src/a.js":function(){b}}"#
    );
  }

  #[test]
  fn array_bounds_follow_the_shorter_form() {
    let ids = |ids: &[u32]| ids.iter().copied().map(ModuleId::from).collect::<Vec<_>>();
    assert_eq!(array_bounds(&ids(&[0, 1, 2])), Some((0, 2)));
    assert_eq!(array_bounds(&ids(&[5, 900])), None);
    assert_eq!(array_bounds(&ids(&[20, 21, 22, 23, 24, 25, 26, 27, 28, 29])), None);
    assert_eq!(array_bounds(&ids(&(50..100).collect::<Vec<_>>())), Some((50, 99)));
    assert_eq!(array_bounds(&[ModuleId::from("a")]), None);
    assert_eq!(array_bounds(&[]), None);
  }
}
