use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

static LICENSE_COMMENT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)@preserve|@lic|@cc_on|^\**!").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum CommentKind {
  Line,
  Block,
}

/// A comment as reported by the host's parser, without its delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Comment {
  pub kind: CommentKind,
  pub value: String,
}

impl Comment {
  pub fn block(value: impl Into<String>) -> Self {
    Self { kind: CommentKind::Block, value: value.into() }
  }

  pub fn line(value: impl Into<String>) -> Self {
    Self { kind: CommentKind::Line, value: value.into() }
  }

  /// Same selection rule as terser's `comments: "some"`.
  pub fn is_license(&self) -> bool {
    LICENSE_COMMENT_RE.is_match(&self.value)
  }

  pub fn render(&self) -> String {
    match self.kind {
      CommentKind::Line => format!("//{}", self.value),
      CommentKind::Block => format!("/*{}*/", self.value),
    }
  }
}

#[test]
fn test_is_license() {
  assert!(Comment::block("! (c) Someone").is_license());
  assert!(Comment::block("*! keep").is_license());
  assert!(Comment::block("* @license MIT").is_license());
  assert!(Comment::line(" @PRESERVE").is_license());
  assert!(Comment::block("@cc_on").is_license());
  assert!(!Comment::block(" regular comment ! ").is_license());
  assert!(!Comment::line(" eslint-disable").is_license());
}

#[test]
fn test_render() {
  assert_eq!(Comment::block("! MIT").render(), "/*! MIT*/");
  assert_eq!(Comment::line(" @license MIT").render(), "// @license MIT");
}
