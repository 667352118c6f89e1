pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum MinifyError {
  /// The minifier service reported a failure for one fragment.
  #[error("Failed to minify {target}: {source}")]
  Minifier { target: String, source: BoxedError },

  /// A `postProcessCodeFragment` participant failed, or the minified text lost its boilerplate.
  #[error("Failed to post-process {target}: {source}")]
  PostProcessing { target: String, source: BoxedError },

  /// A `finalModuleId` participant failed; the module is routed through unminified.
  #[error("Failed to resolve the final id of module {module}: {source}")]
  ModuleIdRemap { module: String, source: BoxedError },

  #[error("Chunk {chunk} failed to render module {module} for {identifier}")]
  UnsubmittedModule { chunk: String, module: String, identifier: String },

  #[error("Failed to release the minifier: {0}")]
  Teardown(#[source] BoxedError),
}

impl MinifyError {
  pub fn minifier(target: impl Into<String>, source: anyhow::Error) -> Self {
    Self::Minifier { target: target.into(), source: source.into() }
  }

  pub fn post_processing(target: impl Into<String>, source: anyhow::Error) -> Self {
    Self::PostProcessing { target: target.into(), source: source.into() }
  }

  pub fn teardown(source: anyhow::Error) -> Self {
    Self::Teardown(source.into())
  }
}

#[test]
fn test_display_names_the_target() {
  let err = MinifyError::minifier("module 2 (./b.js)", anyhow::anyhow!("Unexpected token"));
  assert_eq!(err.to_string(), "Failed to minify module 2 (./b.js): Unexpected token");

  let err: anyhow::Error = MinifyError::teardown(anyhow::anyhow!("pool poisoned")).into();
  assert!(matches!(err.downcast_ref::<MinifyError>(), Some(MinifyError::Teardown(_))));
}
