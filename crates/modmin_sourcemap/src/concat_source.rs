use crate::{
  cursor::end_position,
  source::{Source, SourceMapSource},
  token_sink::TokenSink,
};

/// Joins sources end to end, merging their maps.
#[derive(Default)]
pub struct ConcatSource {
  content: String,
  sink: TokenSink,
  has_map: bool,
  end_line: u32,
  end_col: u32,
}

impl ConcatSource {
  pub fn add(&mut self, source: &SourceMapSource) {
    if source.map().is_some() {
      self.has_map = true;
      source.import_into(&mut self.sink, self.end_line, self.end_col);
    }
    self.push_content(source.content());
  }

  pub fn add_str(&mut self, content: &str) {
    self.push_content(content);
  }

  fn push_content(&mut self, content: &str) {
    let (lines, col) = end_position(content);
    if lines == 0 {
      self.end_col += col;
    } else {
      self.end_line += lines;
      self.end_col = col;
    }
    self.content.push_str(content);
  }

  pub fn finish(self) -> SourceMapSource {
    let map = self.has_map.then(|| self.sink.into_sourcemap());
    SourceMapSource::new(self.content, map)
  }
}

impl Source for ConcatSource {
  fn content(&self) -> &str {
    &self.content
  }
}
