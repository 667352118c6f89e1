use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

use dashmap::DashMap;
use modmin_common::{
  CompletionCallback, Fingerprint, MinificationRequest, MinifiedCode, MinifierLease,
  ModuleMinifier,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
  fingerprint: Fingerprint,
  name_for_map: Option<String>,
  externals: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
  pub hits: usize,
  pub misses: usize,
}

/// Remembers successful results by fingerprint so identical code is only minified once per
/// process. Failures are never cached.
pub struct CachedMinifier<M> {
  inner: M,
  cache: Arc<DashMap<CacheKey, MinifiedCode>>,
  hits: AtomicUsize,
  misses: AtomicUsize,
}

impl<M: ModuleMinifier> CachedMinifier<M> {
  pub fn new(inner: M) -> Self {
    Self {
      inner,
      cache: Arc::default(),
      hits: AtomicUsize::new(0),
      misses: AtomicUsize::new(0),
    }
  }

  pub fn inner(&self) -> &M {
    &self.inner
  }

  pub fn stats(&self) -> CacheStats {
    CacheStats {
      hits: self.hits.load(Ordering::Relaxed),
      misses: self.misses.load(Ordering::Relaxed),
    }
  }
}

impl<M: ModuleMinifier> ModuleMinifier for CachedMinifier<M> {
  fn minify(&self, request: MinificationRequest, on_complete: CompletionCallback) {
    let key = CacheKey {
      fingerprint: request.fingerprint.clone(),
      name_for_map: request.name_for_map.clone(),
      externals: request.externals.clone(),
    };

    let hit = self.cache.get(&key).map(|entry| entry.value().clone());
    if let Some(minified) = hit {
      self.hits.fetch_add(1, Ordering::Relaxed);
      tracing::trace!(fingerprint = %key.fingerprint, "minification cache hit");
      on_complete.call(Ok(minified));
      return;
    }

    self.misses.fetch_add(1, Ordering::Relaxed);
    let cache = Arc::clone(&self.cache);
    let on_complete = on_complete.inspect(move |result| {
      if let Ok(minified) = result {
        cache.insert(key, minified.clone());
      }
    });
    self.inner.minify(request, on_complete);
  }

  fn acquire(&self) -> Option<Box<dyn MinifierLease>> {
    self.inner.acquire()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Default)]
  struct Counting {
    calls: AtomicUsize,
  }

  impl ModuleMinifier for Counting {
    fn minify(&self, request: MinificationRequest, on_complete: CompletionCallback) {
      self.calls.fetch_add(1, Ordering::SeqCst);
      if request.code.contains("SYNTAX_ERROR") {
        on_complete.call(Err(anyhow::anyhow!("unexpected token")));
      } else {
        on_complete.call(Ok(MinifiedCode { code: request.code.replace(' ', ""), map: None }));
      }
    }
  }

  fn request(code: &str) -> MinificationRequest {
    MinificationRequest {
      fingerprint: Fingerprint::of(code),
      code: code.to_string(),
      name_for_map: None,
      externals: None,
    }
  }

  async fn run(minifier: &CachedMinifier<Counting>, code: &str) -> anyhow::Result<MinifiedCode> {
    let (on_complete, rx) = CompletionCallback::channel();
    minifier.minify(request(code), on_complete);
    rx.await?
  }

  #[tokio::test]
  async fn serves_repeated_code_from_the_cache() {
    let minifier = CachedMinifier::new(Counting::default());
    assert_eq!(run(&minifier, "a + b").await.unwrap().code, "a+b");
    assert_eq!(run(&minifier, "a + b").await.unwrap().code, "a+b");
    assert_eq!(minifier.inner().calls.load(Ordering::SeqCst), 1);
    assert_eq!(minifier.stats(), CacheStats { hits: 1, misses: 1 });
  }

  #[tokio::test]
  async fn does_not_cache_failures() {
    let minifier = CachedMinifier::new(Counting::default());
    assert!(run(&minifier, "SYNTAX_ERROR").await.is_err());
    assert!(run(&minifier, "SYNTAX_ERROR").await.is_err());
    assert_eq!(minifier.inner().calls.load(Ordering::SeqCst), 2);
  }

  #[tokio::test]
  async fn map_requests_are_cached_separately() {
    let minifier = CachedMinifier::new(Counting::default());
    run(&minifier, "x").await.unwrap();
    let (on_complete, rx) = CompletionCallback::channel();
    let mut with_map = request("x");
    with_map.name_for_map = Some("(modules)/0".to_string());
    minifier.minify(with_map, on_complete);
    rx.await.unwrap().unwrap();
    assert_eq!(minifier.inner().calls.load(Ordering::SeqCst), 2);
  }
}
