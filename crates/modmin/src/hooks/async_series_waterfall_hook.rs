use futures::{future::BoxFuture, FutureExt};

use super::tap::{insert_tap, Tap, TapOptions};

type AsyncTapFn<T, C> =
  Box<dyn for<'a> Fn(T, &'a mut C) -> BoxFuture<'a, anyhow::Result<T>> + Send + Sync>;

/// Awaits each tap in turn, feeding it the previous tap's output.
pub struct AsyncSeriesWaterfallHook<T, C> {
  taps: Vec<Tap<AsyncTapFn<T, C>>>,
}

impl<T, C> Default for AsyncSeriesWaterfallHook<T, C> {
  fn default() -> Self {
    Self { taps: vec![] }
  }
}

impl<T: Send + 'static, C: Send> AsyncSeriesWaterfallHook<T, C> {
  pub fn tap_promise(
    &mut self,
    options: impl Into<TapOptions>,
    f: impl for<'a> Fn(T, &'a mut C) -> BoxFuture<'a, anyhow::Result<T>> + Send + Sync + 'static,
  ) {
    insert_tap(&mut self.taps, Tap { options: options.into(), f: Box::new(f) });
  }

  pub fn tap_sync(
    &mut self,
    options: impl Into<TapOptions>,
    f: impl Fn(T, &mut C) -> anyhow::Result<T> + Send + Sync + 'static,
  ) {
    self.tap_promise(options, move |value, context| {
      futures::future::ready(f(value, context)).boxed()
    });
  }

  pub async fn call(&self, mut value: T, context: &mut C) -> anyhow::Result<T> {
    for tap in &self.taps {
      value = (tap.f)(value, &mut *context).await?;
    }
    Ok(value)
  }

  pub fn tap_names(&self) -> impl Iterator<Item = &str> {
    self.taps.iter().map(|tap| tap.options.name.as_ref())
  }
}

#[cfg(test)]
mod tests {
  use modmin_common::STAGE_BEFORE;

  use super::*;

  #[tokio::test]
  async fn awaits_taps_in_order_with_shared_context() {
    let mut hook = AsyncSeriesWaterfallHook::<Vec<&'static str>, Vec<&'static str>>::default();
    hook.tap_sync("sync", |mut value, log| {
      log.push("sync");
      value.push("b");
      Ok(value)
    });
    hook.tap_promise(TapOptions::new("async").with_stage(STAGE_BEFORE), |mut value, log| {
      async move {
        tokio::task::yield_now().await;
        log.push("async");
        value.push("a");
        Ok(value)
      }
      .boxed()
    });

    let mut log = vec![];
    let value = hook.call(vec![], &mut log).await.unwrap();
    assert_eq!(value, ["a", "b"]);
    assert_eq!(log, ["async", "sync"]);
  }

  #[tokio::test]
  async fn failing_tap_rejects_the_call() {
    let mut hook = AsyncSeriesWaterfallHook::<u32, ()>::default();
    hook.tap_sync("fail", |_, ()| anyhow::bail!("rehydration failed"));
    assert!(hook.call(0, &mut ()).await.is_err());
  }
}
