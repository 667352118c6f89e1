use std::path::PathBuf;

use modmin_common::{MinificationRequest, MinifiedCode};
use oxc::{
  allocator::Allocator,
  codegen::{Codegen, CodegenOptions},
  minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions},
  parser::Parser,
  span::SourceType,
};
use oxc_sourcemap::SourceMap;

/// Parses, compresses, mangles and prints one request.
///
/// Requests with externals are not mangled: the external placeholders are bindings of the asset
/// and have to keep their names until rehydration renames them.
pub fn minify_code(request: &MinificationRequest) -> anyhow::Result<MinifiedCode> {
  let allocator = Allocator::default();
  let source_type = SourceType::cjs();

  let ret = Parser::new(&allocator, &request.code, source_type).parse();
  if !ret.errors.is_empty() {
    anyhow::bail!("{:?}", ret.errors);
  }
  let program = allocator.alloc(ret.program);

  let keeps_bindings = request.externals.as_ref().is_some_and(|externals| !externals.is_empty());
  let ret = Minifier::new(MinifierOptions {
    mangle: (!keeps_bindings).then(MangleOptions::default),
    compress: Some(CompressOptions {
      drop_debugger: false,
      drop_console: false,
      ..CompressOptions::default()
    }),
  })
  .build(&allocator, program);

  let ret = Codegen::new()
    .with_options(CodegenOptions {
      minify: true,
      source_map_path: request.name_for_map.as_ref().map(PathBuf::from),
      ..CodegenOptions::default()
    })
    .with_scoping(ret.scoping)
    .build(program);

  // oxc_codegen may link another oxc_sourcemap release than this crate.
  let map = ret
    .map
    .map(|map| SourceMap::from_json_string(&map.to_json_string()))
    .transpose()
    .map_err(|err| anyhow::anyhow!("{err:?}"))?;

  Ok(MinifiedCode { code: ret.code, map })
}
