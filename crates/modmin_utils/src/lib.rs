pub mod indexmap;
pub mod minified_identifier;
pub mod to_identifier;
pub mod xxhash;
