use std::borrow::Cow;

use modmin_common::STAGE_DEFAULT;

#[derive(Debug, Clone)]
pub struct TapOptions {
  pub name: Cow<'static, str>,
  /// Taps run in ascending stage, then in registration order.
  pub stage: i32,
}

impl TapOptions {
  pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
    Self { name: name.into(), stage: STAGE_DEFAULT }
  }

  #[must_use]
  pub fn with_stage(mut self, stage: i32) -> Self {
    self.stage = stage;
    self
  }
}

impl From<&'static str> for TapOptions {
  fn from(name: &'static str) -> Self {
    Self::new(name)
  }
}

pub(super) struct Tap<F> {
  pub options: TapOptions,
  pub f: F,
}

pub(super) fn insert_tap<F>(taps: &mut Vec<Tap<F>>, tap: Tap<F>) {
  let index = taps.partition_point(|existing| existing.options.stage <= tap.options.stage);
  taps.insert(index, tap);
}
