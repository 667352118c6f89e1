use oxc_sourcemap::{SourceMap, SourceMapBuilder};
use rustc_hash::FxHashMap;

/// A token read out of an existing map, with its ids still local to that map.
#[derive(Debug, Clone, Copy)]
pub struct RawToken {
  pub dst_line: u32,
  pub dst_col: u32,
  pub src_line: u32,
  pub src_col: u32,
  pub source_id: Option<u32>,
  pub name_id: Option<u32>,
}

/// Tokens of `map`, ordered by generated position.
pub fn sorted_tokens(map: &SourceMap) -> Vec<RawToken> {
  let mut tokens = map
    .get_tokens()
    .map(|token| RawToken {
      dst_line: token.get_dst_line(),
      dst_col: token.get_dst_col(),
      src_line: token.get_src_line(),
      src_col: token.get_src_col(),
      source_id: token.get_source_id(),
      name_id: token.get_name_id(),
    })
    .collect::<Vec<_>>();
  tokens.sort_by_key(|token| (token.dst_line, token.dst_col));
  tokens
}

/// Ids of one imported map, translated into the sink's tables.
pub struct ImportedTables {
  sources: Vec<u32>,
  names: Vec<u32>,
}

/// Accumulates tokens from any number of maps into a single new map, merging
/// their `sources` and `names` tables.
#[derive(Default)]
pub struct TokenSink {
  builder: SourceMapBuilder,
  sources: FxHashMap<String, u32>,
  names: FxHashMap<String, u32>,
}

impl TokenSink {
  pub fn import_tables(&mut self, map: &SourceMap) -> ImportedTables {
    let mut sources = vec![];
    let mut id = 0;
    while let Some(source) = map.get_source(id) {
      let source = source.to_string();
      let content =
        map.get_source_content(id).map(|content| content.to_string()).unwrap_or_default();
      let builder = &mut self.builder;
      let new_id = *self
        .sources
        .entry(source)
        .or_insert_with_key(|source| builder.add_source_and_content(source, &content));
      sources.push(new_id);
      id += 1;
    }

    let mut names = vec![];
    let mut id = 0;
    while let Some(name) = map.get_name(id) {
      let builder = &mut self.builder;
      let new_id =
        *self.names.entry(name.to_string()).or_insert_with_key(|name| builder.add_name(name));
      names.push(new_id);
      id += 1;
    }

    ImportedTables { sources, names }
  }

  pub fn add_token(
    &mut self,
    dst_line: u32,
    dst_col: u32,
    token: &RawToken,
    tables: &ImportedTables,
  ) {
    let source_id = token.source_id.and_then(|id| tables.sources.get(id as usize).copied());
    let name_id = token.name_id.and_then(|id| tables.names.get(id as usize).copied());
    self.builder.add_token(dst_line, dst_col, token.src_line, token.src_col, source_id, name_id);
  }

  pub fn into_sourcemap(self) -> SourceMap {
    self.builder.into_sourcemap()
  }
}
