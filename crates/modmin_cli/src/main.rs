mod args;
mod manifest;
mod types;

use std::{
  fs,
  path::{Path, PathBuf},
  sync::Arc,
  time::Instant,
};

use ansi_term::Colour;
use anyhow::Context;
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;
use manifest::Manifest;
use modmin::{
  BuildInfo, BuildResult, ModuleMinifierOptions, ModuleMinifierPlugin, MinifyOutput, OutputAsset,
  SharedMinifier,
};
use modmin_minifier::{CacheStats, CachedMinifier, OxcMinifier};
use modmin_utils::indexmap::FxIndexMap;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

struct Report {
  output: MinifyOutput,
  cache: CacheStats,
}

fn print_output_assets(outputs: &[OutputAsset]) {
  let mut left = 0;
  let mut right = 0;

  let mut assets = Vec::with_capacity(outputs.len());

  for output in outputs {
    let size = format!("{:.2}", output.content.len() as f64 / 1024.0);

    if size.len() > right {
      right = size.len();
    }

    if output.filename.len() > left {
      left = output.filename.len();
    }

    let is_chunk = !output.filename.ends_with(".LICENSE.txt");
    assets.push((output.filename.as_str(), size, is_chunk));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (filename, size, is_chunk) in assets {
    let asset_type = if is_chunk { "chunk" } else { "asset" };
    let filename_len = filename.len();

    println!(
      "{}{}{:left$} {}{}{:right$}{} kB",
      dim.paint("<DIR>/"),
      color.paint(filename),
      "",
      dim.paint(asset_type),
      dim.paint(" │ size: "),
      "",
      size,
      left = left - filename_len,
      right = right - size.len()
    );
  }
}

fn init_tracing() {
  let filter = EnvFilter::try_from_env("MODMIN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn write_assets(dir: &Path, assets: &[OutputAsset]) -> anyhow::Result<()> {
  for asset in assets {
    let path = dir.join(&asset.filename);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut content = asset.content.clone();
    if let Some(map) = &asset.map {
      let map_path = PathBuf::from(format!("{}.map", path.display()));
      if let Some(name) = map_path.file_name() {
        content.push_str(&format!("\n//# sourceMappingURL={}", name.to_string_lossy()));
      }
      fs::write(&map_path, map)
        .with_context(|| format!("Failed to write {}", map_path.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  }
  Ok(())
}

async fn build(args: &Commands) -> BuildResult<Report> {
  let manifest = Manifest::read(&args.input.manifest)?;
  let cwd = match &args.input.cwd {
    Some(cwd) => cwd.clone(),
    None => std::env::current_dir().context("Failed to resolve the current directory")?,
  };
  let build_info = BuildInfo { mode: manifest.build_mode(), devtool: manifest.devtool(), cwd };

  let mut oxc = OxcMinifier::new();
  if let Some(threads) = args.enhance.threads {
    oxc = oxc.with_threads(threads);
  }
  let minifier = Arc::new(CachedMinifier::new(oxc));

  let plugin = ModuleMinifierPlugin::new(ModuleMinifierOptions {
    minifier: Arc::clone(&minifier) as SharedMinifier,
    source_map: args.enhance.source_map,
    use_portable_modules: args.enhance.portable,
    module_container: Some(args.enhance.container.clone().into()),
  });
  let mut compilation = plugin.compilation(&build_info);

  for module in &manifest.modules {
    compilation.assign_portable_id(&module.id, &module.identifier);
    compilation.extract_license_comments(&module.id, module.comments.iter().cloned());
    compilation.minify_module(&module.rendered());
  }

  let mut chunks = Vec::with_capacity(manifest.chunks.len());
  let mut templates = FxIndexMap::default();
  for chunk in manifest.chunks {
    let info = chunk.info();
    let hole = compilation.dehydrate_chunk(&info);
    for file in chunk.files {
      templates.insert(file.name.clone(), file.template(hole));
    }
    chunks.push(info);
  }
  compilation.minify_chunk_assets(&chunks, templates);

  let output = compilation.finish().await?;
  if !output.errors.is_empty() {
    return Err(output.errors.into());
  }
  write_assets(&args.output.dir, &output.assets)?;

  Ok(Report { output, cache: minifier.stats() })
}

#[tokio::main]
async fn main() {
  let args = Commands::parse();
  init_tracing();

  let start = Instant::now();
  match build(&args).await {
    Ok(Report { output, cache }) => {
      if !args.output.silent {
        // Print warnings
        for warning in &output.warnings {
          println!("{} {}", Colour::Yellow.paint("Warning:"), warning);
        }

        // Print output assets
        if !output.assets.is_empty() {
          print_output_assets(&output.assets);
        }

        println!(
          "{}",
          Colour::White.dimmed().paint(format!(
            "{} modules, {} cache hits, {} misses",
            output.modules.len(),
            cache.hits,
            cache.misses
          ))
        );
      }

      let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
      println!(
        "\n{} Finished in {}",
        Colour::Green.paint("✔"),
        Colour::White.bold().paint(elapsed)
      );
    }
    Err(errors) => {
      for error in &*errors {
        println!("{} {}", Colour::Red.paint("Error:"), error);
      }
    }
  }
}
