use crate::{
  cursor::Cursor,
  source::{Source, SourceMapSource},
  token_sink::{sorted_tokens, TokenSink},
};

#[derive(Debug)]
struct Replacement {
  start: usize,
  end: usize,
  content: String,
}

/// Byte-range edits on top of a [`SourceMapSource`].
///
/// Ranges always refer to the original text. Tokens inside a replaced range are dropped,
/// all others keep pointing at their original location.
#[derive(Debug)]
pub struct ReplaceSource {
  inner: SourceMapSource,
  replacements: Vec<Replacement>,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
  old_start: usize,
  old_end: usize,
  new_end: usize,
}

impl ReplaceSource {
  pub fn new(inner: SourceMapSource) -> Self {
    Self { inner, replacements: vec![] }
  }

  pub fn original(&self) -> &str {
    self.inner.content()
  }

  /// Replaces `start..end` of the original text with `content`.
  pub fn replace(&mut self, start: usize, end: usize, content: impl Into<String>) {
    debug_assert!(start <= end && end <= self.original().len());
    self.replacements.push(Replacement { start, end, content: content.into() });
  }

  pub fn insert(&mut self, pos: usize, content: impl Into<String>) {
    self.replace(pos, pos, content);
  }

  pub fn into_source(self) -> SourceMapSource {
    if self.replacements.is_empty() {
      return self.inner;
    }
    let Self { inner, mut replacements } = self;
    replacements.sort_by_key(|replacement| replacement.start);

    let original = inner.content();
    let mut content = String::with_capacity(original.len());
    let mut segments = Vec::with_capacity(replacements.len());
    let mut pos = 0;
    for Replacement { start, end, content: replacement } in replacements {
      // Overlapping edits are clamped to what is still left of the original.
      let start = start.max(pos);
      let end = end.max(start);
      content.push_str(&original[pos..start]);
      content.push_str(&replacement);
      segments.push(Segment { old_start: start, old_end: end, new_end: content.len() });
      pos = end;
    }
    content.push_str(&original[pos..]);

    let map = inner.map().map(|map| {
      let mut sink = TokenSink::default();
      let tables = sink.import_tables(map);
      let mut old_cursor = Cursor::new(original);
      let mut new_cursor = Cursor::new(&content);
      let (mut old_anchor, mut new_anchor) = (0, 0);
      let mut segments = segments.iter().peekable();

      for token in sorted_tokens(map) {
        let Some(byte) = old_cursor.seek_position(token.dst_line, token.dst_col) else {
          continue;
        };
        while let Some(segment) = segments.next_if(|segment| segment.old_end <= byte) {
          old_anchor = segment.old_end;
          new_anchor = segment.new_end;
        }
        if segments.peek().is_some_and(|segment| segment.old_start <= byte) {
          continue;
        }
        new_cursor.seek_byte(new_anchor + (byte - old_anchor));
        sink.add_token(new_cursor.line(), new_cursor.col(), &token, &tables);
      }
      sink.into_sourcemap()
    });

    SourceMapSource::new(content, map)
  }
}
