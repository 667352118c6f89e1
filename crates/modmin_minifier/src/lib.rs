mod cached_minifier;
mod minify_code;
mod oxc_minifier;

pub use crate::{
  cached_minifier::{CacheStats, CachedMinifier},
  minify_code::minify_code,
  oxc_minifier::OxcMinifier,
};
