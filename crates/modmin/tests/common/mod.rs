#![allow(dead_code)]

use std::{
  sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
  },
  time::Duration,
};

use futures::{future::BoxFuture, FutureExt};
use modmin::{
  BuildInfo, BuildMode, ChunkInfo, ChunkModule, CompletionCallback, Devtool, MinificationRequest,
  MinifiedCode, MinifierLease, ModuleId, ModuleMinifier, ModuleMinifierOptions,
};
use modmin_sourcemap::SourceMapBuilder;

/// Joins trimmed lines, which keeps the wrapper and placeholders intact.
pub fn squeeze(code: &str) -> String {
  code.lines().map(str::trim).collect()
}

#[derive(Default, Clone)]
pub struct Calls {
  pub requests: Arc<Mutex<Vec<MinificationRequest>>>,
  pub releases: Arc<AtomicUsize>,
}

impl Calls {
  pub fn requests(&self) -> Vec<MinificationRequest> {
    self.requests.lock().unwrap().clone()
  }

  pub fn releases(&self) -> usize {
    self.releases.load(Ordering::SeqCst)
  }
}

/// Squeezes code on background threads, finishing later requests first.
///
/// Code containing `SYNTAX_ERROR` fails, code containing `DROP_CALLBACK` never completes.
#[derive(Default)]
pub struct FakeMinifier {
  pub calls: Calls,
  pub fail_release: bool,
  pub with_maps: bool,
  pub issued: AtomicUsize,
}

impl FakeMinifier {
  pub fn new(calls: &Calls) -> Self {
    Self { calls: calls.clone(), ..Self::default() }
  }
}

impl ModuleMinifier for FakeMinifier {
  fn minify(&self, request: MinificationRequest, on_complete: CompletionCallback) {
    self.calls.requests.lock().unwrap().push(request.clone());
    if request.code.contains("DROP_CALLBACK") {
      drop(on_complete);
      return;
    }

    let result = if request.code.contains("SYNTAX_ERROR") {
      Err(anyhow::anyhow!("Unexpected token"))
    } else if self.with_maps {
      Ok(MinifiedCode { map: Some(line_map(&request)), code: request.code.clone() })
    } else {
      Ok(MinifiedCode { code: squeeze(&request.code), map: None })
    };

    let n = self.issued.fetch_add(1, Ordering::SeqCst) as u64;
    let delay = Duration::from_millis((5 - n % 5) * 4);
    std::thread::spawn(move || {
      std::thread::sleep(delay);
      on_complete.call(result);
    });
  }

  fn acquire(&self) -> Option<Box<dyn MinifierLease>> {
    Some(Box::new(FakeLease {
      releases: Arc::clone(&self.calls.releases),
      fail: self.fail_release,
    }))
  }
}

struct FakeLease {
  releases: Arc<AtomicUsize>,
  fail: bool,
}

impl MinifierLease for FakeLease {
  fn release(self: Box<Self>) -> BoxFuture<'static, anyhow::Result<()>> {
    async move {
      self.releases.fetch_add(1, Ordering::SeqCst);
      if self.fail {
        anyhow::bail!("worker pool crashed");
      }
      Ok(())
    }
    .boxed()
  }
}

/// One token at the start of every line, mapping to the same line of the input.
fn line_map(request: &MinificationRequest) -> modmin_sourcemap::SourceMap {
  let mut builder = SourceMapBuilder::default();
  let name = request.name_for_map.clone().unwrap_or_default();
  let source_id = builder.add_source_and_content(&name, &request.code);
  for line in 0..u32::try_from(request.code.lines().count()).unwrap() {
    builder.add_token(line, 0, line, 0, Some(source_id), None);
  }
  builder.into_sourcemap()
}

pub fn build_info() -> BuildInfo {
  BuildInfo { mode: BuildMode::Production, devtool: Devtool::Disabled, cwd: "/repo".into() }
}

pub fn options(minifier: FakeMinifier) -> ModuleMinifierOptions {
  let mut options = ModuleMinifierOptions::new(minifier);
  options.source_map = Some(false);
  options
}

pub fn chunk(id: &str, files: &[&str], modules: &[(u32, &str)]) -> ChunkInfo {
  ChunkInfo {
    id: id.to_string(),
    files: files.iter().map(ToString::to_string).collect(),
    modules: modules
      .iter()
      .map(|(id, identifier)| ChunkModule {
        id: Some(ModuleId::from(*id)),
        identifier: (*identifier).to_string(),
        external: false,
      })
      .collect(),
  }
}
