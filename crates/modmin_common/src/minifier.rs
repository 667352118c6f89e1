use std::{fmt, sync::Arc};

use futures::future::BoxFuture;
use modmin_sourcemap::SourceMap;
use tokio::sync::oneshot;

use crate::Fingerprint;

#[derive(Debug, Clone)]
pub struct MinificationRequest {
  pub fingerprint: Fingerprint,
  pub code: String,
  /// Set when a source map is wanted for this fragment.
  pub name_for_map: Option<String>,
  /// Placeholder names of external modules in a whole-asset request. They are free variables of
  /// the asset and must survive minification untouched.
  pub externals: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct MinifiedCode {
  pub code: String,
  pub map: Option<SourceMap>,
}

pub type MinificationResult = anyhow::Result<MinifiedCode>;

/// One-shot continuation handed to a [`ModuleMinifier`] with each request.
///
/// It can be invoked from any thread. Being `FnOnce` behind a by-value `call`, it reports at most
/// one result; dropping it without calling reports nothing, which the receiving side treats as a
/// failure.
pub struct CompletionCallback(Box<dyn FnOnce(MinificationResult) + Send>);

impl CompletionCallback {
  pub fn new(f: impl FnOnce(MinificationResult) + Send + 'static) -> Self {
    Self(Box::new(f))
  }

  /// A callback that forwards its result into the returned receiver.
  pub fn channel() -> (Self, oneshot::Receiver<MinificationResult>) {
    let (tx, rx) = oneshot::channel();
    let callback = Self::new(move |result| {
      // The receiver is gone only when the compilation was dropped mid-flight.
      let _ = tx.send(result);
    });
    (callback, rx)
  }

  pub fn call(self, result: MinificationResult) {
    (self.0)(result);
  }

  /// Lets `f` observe the result before it is forwarded.
  #[must_use]
  pub fn inspect(self, f: impl FnOnce(&MinificationResult) + Send + 'static) -> Self {
    Self::new(move |result| {
      f(&result);
      self.call(result);
    })
  }
}

impl fmt::Debug for CompletionCallback {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CompletionCallback").finish_non_exhaustive()
  }
}

/// The external minification service.
pub trait ModuleMinifier: Send + Sync {
  /// Starts minifying `request`. The service must eventually call `on_complete`, possibly from
  /// another thread and in any order relative to other requests.
  fn minify(&self, request: MinificationRequest, on_complete: CompletionCallback);

  /// Called once per compilation before any request is issued. Services that hold resources
  /// (worker pools, connections) return a lease, released after the last completion.
  fn acquire(&self) -> Option<Box<dyn MinifierLease>> {
    None
  }
}

pub trait MinifierLease: Send {
  fn release(self: Box<Self>) -> BoxFuture<'static, anyhow::Result<()>>;
}

pub type SharedMinifier = Arc<dyn ModuleMinifier>;
