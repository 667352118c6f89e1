use std::sync::{Arc, Mutex, MutexGuard};

use futures::{future::BoxFuture, FutureExt};
use modmin_common::{CompletionCallback, MinificationRequest, MinifierLease, ModuleMinifier};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::minify_code::minify_code;

#[derive(Default)]
struct PoolState {
  pool: Option<Arc<ThreadPool>>,
  leases: usize,
}

/// Minifies with oxc on a dedicated rayon pool. The pool is started on first use and shut
/// down when the last compilation holding a lease releases it.
#[derive(Clone, Default)]
pub struct OxcMinifier {
  state: Arc<Mutex<PoolState>>,
  threads: Option<usize>,
}

fn lock(state: &Mutex<PoolState>) -> anyhow::Result<MutexGuard<'_, PoolState>> {
  state.lock().map_err(|_| anyhow::anyhow!("the minifier pool state is poisoned"))
}

impl OxcMinifier {
  pub fn new() -> Self {
    Self::default()
  }

  /// Limits the pool to `threads` workers. Defaults to one per CPU.
  #[must_use]
  pub fn with_threads(mut self, threads: usize) -> Self {
    self.threads = Some(threads);
    self
  }

  pub fn is_running(&self) -> bool {
    lock(&self.state).is_ok_and(|state| state.pool.is_some())
  }

  fn pool(&self) -> anyhow::Result<Arc<ThreadPool>> {
    let mut state = lock(&self.state)?;
    if let Some(pool) = &state.pool {
      return Ok(Arc::clone(pool));
    }
    let mut builder =
      ThreadPoolBuilder::new().thread_name(|index| format!("modmin-minifier-{index}"));
    if let Some(threads) = self.threads {
      builder = builder.num_threads(threads);
    }
    let pool = Arc::new(builder.build()?);
    tracing::debug!(threads = pool.current_num_threads(), "started minifier pool");
    state.pool = Some(Arc::clone(&pool));
    Ok(pool)
  }
}

impl ModuleMinifier for OxcMinifier {
  fn minify(&self, request: MinificationRequest, on_complete: CompletionCallback) {
    match self.pool() {
      Ok(pool) => pool.spawn(move || on_complete.call(minify_code(&request))),
      Err(err) => on_complete.call(Err(err)),
    }
  }

  fn acquire(&self) -> Option<Box<dyn MinifierLease>> {
    match lock(&self.state) {
      Ok(mut state) => state.leases += 1,
      Err(err) => tracing::error!("{err}"),
    }
    Some(Box::new(OxcLease { state: Arc::clone(&self.state) }))
  }
}

struct OxcLease {
  state: Arc<Mutex<PoolState>>,
}

impl MinifierLease for OxcLease {
  fn release(self: Box<Self>) -> BoxFuture<'static, anyhow::Result<()>> {
    async move {
      let mut state = lock(&self.state)?;
      state.leases = state.leases.saturating_sub(1);
      if state.leases == 0 && state.pool.take().is_some() {
        tracing::debug!("stopped minifier pool");
      }
      Ok(())
    }
    .boxed()
  }
}
