use super::tap::{insert_tap, Tap, TapOptions};

type SyncTapFn<T, C> = Box<dyn Fn(T, &C) -> anyhow::Result<T> + Send + Sync>;

/// Threads a value through every tap in order. The first failing tap stops the chain.
pub struct SyncWaterfallHook<T, C: ?Sized> {
  taps: Vec<Tap<SyncTapFn<T, C>>>,
}

impl<T, C: ?Sized> Default for SyncWaterfallHook<T, C> {
  fn default() -> Self {
    Self { taps: vec![] }
  }
}

impl<T, C: ?Sized> SyncWaterfallHook<T, C> {
  pub fn tap(
    &mut self,
    options: impl Into<TapOptions>,
    f: impl Fn(T, &C) -> anyhow::Result<T> + Send + Sync + 'static,
  ) {
    insert_tap(&mut self.taps, Tap { options: options.into(), f: Box::new(f) });
  }

  pub fn call(&self, value: T, context: &C) -> anyhow::Result<T> {
    self.taps.iter().try_fold(value, |value, tap| (tap.f)(value, context))
  }

  pub fn is_empty(&self) -> bool {
    self.taps.is_empty()
  }

  pub fn tap_names(&self) -> impl Iterator<Item = &str> {
    self.taps.iter().map(|tap| tap.options.name.as_ref())
  }
}

#[cfg(test)]
mod tests {
  use modmin_common::{STAGE_AFTER, STAGE_BEFORE};

  use super::*;

  #[test]
  fn runs_taps_by_stage_then_registration() {
    let mut hook = SyncWaterfallHook::<String, str>::default();
    hook.tap(TapOptions::new("after").with_stage(STAGE_AFTER), |value, _| Ok(value + "3"));
    hook.tap("first", |value, _| Ok(value + "1"));
    hook.tap("second", |value, context| Ok(format!("{value}2{context}")));
    hook.tap(TapOptions::new("before").with_stage(STAGE_BEFORE), |value, _| Ok(value + "0"));

    assert_eq!(hook.call(String::new(), "!").unwrap(), "012!3");
    assert_eq!(hook.tap_names().collect::<Vec<_>>(), ["before", "first", "second", "after"]);
  }

  #[test]
  fn stops_at_the_first_error() {
    let mut hook = SyncWaterfallHook::<u32, ()>::default();
    hook.tap("fail", |_, ()| anyhow::bail!("nope"));
    hook.tap("unreachable", |_, ()| unreachable!());
    assert_eq!(hook.call(1, &()).unwrap_err().to_string(), "nope");
  }

  #[test]
  fn empty_hook_is_identity() {
    let hook = SyncWaterfallHook::<Option<u32>, ()>::default();
    assert!(hook.is_empty());
    assert_eq!(hook.call(Some(4), &()).unwrap(), Some(4));
  }
}
