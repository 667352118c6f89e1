mod concat_source;
mod cursor;
mod lines_count;
mod replace_source;
mod source;
mod token_sink;

pub use crate::{
  concat_source::ConcatSource, lines_count::lines_count, replace_source::ReplaceSource,
  source::{Source, SourceMapSource},
};
pub use oxc_sourcemap::{SourceMap, SourceMapBuilder};
