/// Forward-only walk over a text that keeps the byte offset in step with the zero-based
/// line and UTF-16 column used by source map tokens.
pub struct Cursor<'text> {
  text: &'text str,
  byte: usize,
  line: u32,
  col: u32,
}

impl<'text> Cursor<'text> {
  pub fn new(text: &'text str) -> Self {
    Self { text, byte: 0, line: 0, col: 0 }
  }

  pub fn line(&self) -> u32 {
    self.line
  }

  pub fn col(&self) -> u32 {
    self.col
  }

  fn step(&mut self) -> bool {
    let Some(char) = self.text[self.byte..].chars().next() else {
      return false;
    };
    self.byte += char.len_utf8();
    if char == '\n' {
      self.line += 1;
      self.col = 0;
    } else {
      self.col += u32::try_from(char.len_utf16()).unwrap_or(1);
    }
    true
  }

  /// Moves to `byte`, or to the first char boundary after it. Offsets behind the cursor are
  /// ignored.
  pub fn seek_byte(&mut self, byte: usize) {
    while self.byte < byte && self.step() {}
  }

  /// Moves to `(line, col)` and returns its byte offset, or `None` when the position does not
  /// exist in the text (past the end, or past the end of its line). Positions behind the cursor
  /// also yield `None`.
  pub fn seek_position(&mut self, line: u32, col: u32) -> Option<usize> {
    if (line, col) < (self.line, self.col) {
      return None;
    }
    while (self.line, self.col) < (line, col) {
      if self.line == line && self.text[self.byte..].starts_with('\n') {
        return None;
      }
      if !self.step() {
        return None;
      }
    }
    ((self.line, self.col) == (line, col)).then_some(self.byte)
  }
}

/// Line and UTF-16 column reached after walking all of `text`.
pub fn end_position(text: &str) -> (u32, u32) {
  let mut cursor = Cursor::new(text);
  cursor.seek_byte(text.len());
  (cursor.line(), cursor.col())
}
