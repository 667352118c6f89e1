/// Opens the synthetic call every module is wrapped in before minification, so a bare
/// function expression stays a valid program.
pub const MODULE_WRAPPER_PREFIX: &str = "__MINIFY_MODULE__(";
pub const MODULE_WRAPPER_SUFFIX: &str = ");";

/// Returned for every rendered module so the chunk still renders to valid ECMAScript.
pub const MODULE_PLACEHOLDER: &str = "(function(){})";

/// Stands in for a chunk's modules while the surrounding template is minified.
pub const CHUNK_MODULES_TOKEN: &str = "__CHUNK_MODULES__";

/// Prefix of portable module id tokens, `__MODULEID_{hash}__`.
pub const MODULE_ID_TOKEN_PREFIX: &str = "__MODULEID_";
pub const EXTERNAL_MODULE_TOKEN_PREFIX: &str = "__EXTERNAL_MODULE_";

pub const STAGE_BEFORE: i32 = -10000;
pub const STAGE_DEFAULT: i32 = 0;
pub const STAGE_AFTER: i32 = 100;
