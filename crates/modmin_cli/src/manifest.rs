use std::{fs, path::Path};

use anyhow::Context;
use modmin::{
  AssetTemplate, BuildMode, ChunkInfo, ChunkModule, ChunkModulesHole, Comment, Devtool, ModuleId,
  RenderedModule,
};
use serde::Deserialize;

/// Marks where a chunk file's module table goes.
pub const MODULES_MARKER: &str = "{{modules}}";

/// What a host hands over after rendering: every module's code and every chunk's files.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
  #[serde(default)]
  pub mode: Mode,
  #[serde(default)]
  pub devtool: Option<DevtoolSetting>,
  pub modules: Vec<ManifestModule>,
  pub chunks: Vec<ManifestChunk>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Development,
  #[default]
  Production,
  None,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DevtoolSetting {
  Enabled(bool),
  Named(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestModule {
  pub id: ModuleId,
  pub identifier: String,
  pub source: String,
  #[serde(default)]
  pub skip_minification: bool,
  #[serde(default)]
  pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestChunk {
  pub id: String,
  pub files: Vec<ManifestFile>,
  pub modules: Vec<ChunkModule>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestFile {
  pub name: String,
  pub code: String,
}

impl Manifest {
  pub fn read(path: &Path) -> anyhow::Result<Self> {
    let text = fs::read_to_string(path)
      .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid manifest {}", path.display()))
  }

  pub fn build_mode(&self) -> BuildMode {
    match self.mode {
      Mode::Development => BuildMode::Development,
      Mode::Production => BuildMode::Production,
      Mode::None => BuildMode::None,
    }
  }

  pub fn devtool(&self) -> Devtool {
    match &self.devtool {
      None => Devtool::Unset,
      Some(DevtoolSetting::Enabled(false)) => Devtool::Disabled,
      Some(DevtoolSetting::Enabled(true)) => Devtool::Named("source-map".to_string()),
      Some(DevtoolSetting::Named(name)) => Devtool::Named(name.clone()),
    }
  }
}

impl ManifestModule {
  pub fn rendered(&self) -> RenderedModule {
    RenderedModule {
      id: self.id.clone(),
      identifier: self.identifier.clone(),
      source: self.source.clone(),
      skip_minification: self.skip_minification,
    }
  }
}

impl ManifestChunk {
  pub fn info(&self) -> ChunkInfo {
    ChunkInfo {
      id: self.id.clone(),
      files: self.files.iter().map(|file| file.name.clone()).collect(),
      modules: self.modules.clone(),
    }
  }
}

impl ManifestFile {
  pub fn template(self, hole: ChunkModulesHole) -> AssetTemplate {
    match self.code.split_once(MODULES_MARKER) {
      Some((prefix, suffix)) => AssetTemplate::dehydrated(prefix, hole, suffix),
      None => AssetTemplate::Text(self.code),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const MANIFEST: &str = r#"{
    "mode": "production",
    "devtool": "hidden-source-map",
    "modules": [
      {
        "id": 0,
        "identifier": "./src/index.js",
        "source": "function(module) {\n  module.exports = 1;\n}",
        "comments": [{ "kind": "Block", "value": "! MIT" }]
      },
      {
        "id": "lodash",
        "identifier": "external \"lodash\"",
        "source": "",
        "skipMinification": true
      }
    ],
    "chunks": [
      {
        "id": "main",
        "files": [
          { "name": "main.js", "code": "(function(modules) { run(modules); })({{modules}});" },
          { "name": "main.css", "code": "a { color: red }" }
        ],
        "modules": [
          { "id": 0, "identifier": "./src/index.js" },
          { "id": "lodash", "identifier": "external \"lodash\"", "external": true }
        ]
      }
    ]
  }"#;

  #[test]
  fn parses_modules_and_chunks() {
    let manifest: Manifest = serde_json::from_str(MANIFEST).unwrap();
    assert_eq!(manifest.build_mode(), BuildMode::Production);
    assert_eq!(manifest.devtool(), Devtool::Named("hidden-source-map".to_string()));

    assert_eq!(manifest.modules[0].id, ModuleId::from(0));
    assert_eq!(manifest.modules[0].comments, vec![Comment::block("! MIT")]);
    assert!(manifest.modules[1].rendered().skip_minification);

    let info = manifest.chunks[0].info();
    assert_eq!(info.files, vec!["main.js".to_string(), "main.css".to_string()]);
    assert_eq!(info.modules[1].id, Some(ModuleId::from("lodash")));
    assert!(info.modules[1].external);
  }

  #[test]
  fn devtool_false_disables_maps() {
    let manifest: Manifest =
      serde_json::from_str(r#"{ "devtool": false, "modules": [], "chunks": [] }"#).unwrap();
    assert_eq!(manifest.devtool(), Devtool::Disabled);
    assert_eq!(manifest.build_mode(), BuildMode::Production);
  }
}
