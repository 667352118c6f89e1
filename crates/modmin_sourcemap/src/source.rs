use std::ops::Range;

use oxc_sourcemap::SourceMap;

use crate::{
  lines_count::lines_count,
  token_sink::{sorted_tokens, TokenSink},
  ReplaceSource,
};

pub trait Source {
  fn content(&self) -> &str;
  fn lines_count(&self) -> u32 {
    lines_count(self.content())
  }
}

impl Source for &str {
  fn content(&self) -> &str {
    self
  }
}

impl Source for String {
  fn content(&self) -> &str {
    self
  }
}

/// Generated text together with the source map that explains it, if any.
#[derive(Debug, Clone)]
pub struct SourceMapSource {
  content: String,
  map: Option<SourceMap>,
}

impl SourceMapSource {
  pub fn new(content: String, map: Option<SourceMap>) -> Self {
    Self { content, map }
  }

  pub fn raw(content: impl Into<String>) -> Self {
    Self { content: content.into(), map: None }
  }

  pub fn map(&self) -> Option<&SourceMap> {
    self.map.as_ref()
  }

  pub fn byte_len(&self) -> usize {
    self.content.len()
  }

  pub fn into_parts(self) -> (String, Option<SourceMap>) {
    (self.content, self.map)
  }

  /// Points every token at a single original file `name` whose text is `original`.
  ///
  /// Used when the map was produced from a wrapped or otherwise synthetic input and the
  /// original text that should be shown to users is known to have the same line layout.
  #[must_use]
  pub fn with_original(self, name: &str, original: &str) -> Self {
    let Some(map) = self.map else { return self };
    let mut builder = oxc_sourcemap::SourceMapBuilder::default();
    builder.set_file(name);
    let source_id = builder.add_source_and_content(name, original);
    let mut names = vec![];
    let mut id = 0;
    while let Some(name) = map.get_name(id) {
      names.push(builder.add_name(&name.to_string()));
      id += 1;
    }
    for token in sorted_tokens(&map) {
      let name_id = token.name_id.and_then(|id| names.get(id as usize).copied());
      builder.add_token(
        token.dst_line,
        token.dst_col,
        token.src_line,
        token.src_col,
        token.source_id.map(|_| source_id),
        name_id,
      );
    }
    Self { content: self.content, map: Some(builder.into_sourcemap()) }
  }

  /// The bytes in `range`, with the tokens that fall inside it.
  pub fn slice(&self, range: Range<usize>) -> SourceMapSource {
    let len = self.content.len();
    let mut replace = ReplaceSource::new(self.clone());
    if range.end < len {
      replace.replace(range.end, len, "");
    }
    if range.start > 0 {
      replace.replace(0, range.start, "");
    }
    replace.into_source()
  }

  pub(crate) fn import_into(&self, sink: &mut TokenSink, line_offset: u32, col_offset: u32) {
    let Some(map) = &self.map else { return };
    let tables = sink.import_tables(map);
    for token in sorted_tokens(map) {
      let dst_col = if token.dst_line == 0 { token.dst_col + col_offset } else { token.dst_col };
      sink.add_token(token.dst_line + line_offset, dst_col, &token, &tables);
    }
  }
}

impl Source for SourceMapSource {
  fn content(&self) -> &str {
    &self.content
  }
}

impl Source for &SourceMapSource {
  fn content(&self) -> &str {
    &self.content
  }
}
