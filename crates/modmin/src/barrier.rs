use futures::{future::BoxFuture, stream::FuturesUnordered, FutureExt, StreamExt};
use modmin_common::{CompletionCallback, MinificationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierState {
  /// Requests are still being issued.
  Collecting,
  /// No more requests. Completions are being drained.
  Draining,
  Done,
}

/// Counts outstanding minification requests and yields their results once every request has been
/// issued.
///
/// Each request owns a key `K` that comes back with its result, so completions can be matched
/// to whatever issued them without any shared state between the minifier and the compilation.
pub struct CompletionBarrier<K> {
  state: BarrierState,
  pending: FuturesUnordered<BoxFuture<'static, (K, MinificationResult)>>,
}

impl<K: Send + 'static> CompletionBarrier<K> {
  pub fn new() -> Self {
    Self { state: BarrierState::Collecting, pending: FuturesUnordered::new() }
  }

  pub fn state(&self) -> BarrierState {
    self.state
  }

  pub fn pending(&self) -> usize {
    self.pending.len()
  }

  /// Registers one outstanding request and returns the callback that completes it.
  pub fn issue(&mut self, key: K) -> CompletionCallback {
    assert_eq!(
      self.state,
      BarrierState::Collecting,
      "a minification request was issued after the barrier closed"
    );
    let (callback, rx) = CompletionCallback::channel();
    self.pending.push(
      async move {
        let result = rx.await.unwrap_or_else(|_| {
          Err(anyhow::anyhow!(
            "the minifier dropped the completion callback without reporting a result"
          ))
        });
        (key, result)
      }
      .boxed(),
    );
    callback
  }

  /// Marks that every request has been issued.
  pub fn close(&mut self) {
    if self.state == BarrierState::Collecting {
      self.state =
        if self.pending.is_empty() { BarrierState::Done } else { BarrierState::Draining };
    }
  }

  /// Next result in completion order. `None` before `close` and once everything has been yielded.
  pub async fn next_completion(&mut self) -> Option<(K, MinificationResult)> {
    if self.state != BarrierState::Draining {
      return None;
    }
    let completion = self.pending.next().await;
    if self.pending.is_empty() {
      self.state = BarrierState::Done;
    }
    completion
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use modmin_common::MinifiedCode;

  use super::*;

  fn ok(code: &str) -> MinificationResult {
    Ok(MinifiedCode { code: code.to_string(), map: None })
  }

  #[tokio::test]
  async fn closing_an_idle_barrier_finishes_it() {
    let mut barrier = CompletionBarrier::<u32>::new();
    assert!(barrier.next_completion().await.is_none());
    barrier.close();
    assert_eq!(barrier.state(), BarrierState::Done);
    assert!(barrier.next_completion().await.is_none());
  }

  #[tokio::test]
  async fn yields_every_completion_in_completion_order() {
    let mut barrier = CompletionBarrier::new();
    let slow = barrier.issue("slow");
    let fast = barrier.issue("fast");
    let early = barrier.issue("early");
    early.call(ok("e"));
    assert_eq!(barrier.pending(), 3);

    std::thread::spawn(move || {
      std::thread::sleep(Duration::from_millis(30));
      slow.call(ok("s"));
    });
    std::thread::spawn(move || fast.call(ok("f")));

    barrier.close();
    assert_eq!(barrier.state(), BarrierState::Draining);

    let mut keys = vec![];
    while let Some((key, result)) = barrier.next_completion().await {
      assert!(result.is_ok());
      keys.push(key);
    }
    assert_eq!(keys.len(), 3);
    assert_eq!(keys.last(), Some(&"slow"));
    assert_eq!(barrier.state(), BarrierState::Done);
    assert_eq!(barrier.pending(), 0);
  }

  #[tokio::test]
  async fn dropped_callbacks_complete_with_an_error() {
    let mut barrier = CompletionBarrier::new();
    drop(barrier.issue(1));
    barrier.close();
    let (key, result) = barrier.next_completion().await.unwrap();
    assert_eq!(key, 1);
    assert!(result.unwrap_err().to_string().contains("dropped the completion callback"));
    assert!(barrier.next_completion().await.is_none());
  }

  #[test]
  #[should_panic(expected = "issued after the barrier closed")]
  fn issuing_after_close_panics() {
    let mut barrier = CompletionBarrier::new();
    barrier.close();
    let _ = barrier.issue(());
  }
}
