//! Manifest type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::HeaderTemplate;
use crate::error::AssetgenResult;

use super::loader::{self, ConfigWarning};

/// Output location settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output root, relative to the manifest directory
    #[serde(default = "default_output_root")]
    pub root: PathBuf,

    /// Per-entry directory under the root; `{platform}` is substituted
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_output_root(),
            dir: default_output_dir(),
        }
    }
}

fn default_output_root() -> PathBuf {
    PathBuf::from("generated")
}

fn default_output_dir() -> String {
    "{platform}".to_string()
}

/// License boilerplate for the copyright block
///
/// ```toml
/// [header]
/// sections = [
///   ["                         This file is part of:", "..."],
///   ["Copyright (c) ...", "", "Permission is hereby granted ..."],
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HeaderConfig {
    #[serde(default)]
    pub sections: Option<Vec<Vec<String>>>,
}

/// Content checks applied before embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateConfig {
    /// Well-formedness check for `svg` sources
    #[serde(default = "default_true")]
    pub svg: bool,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self { svg: true }
    }
}

fn default_true() -> bool {
    true
}

/// Execution settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunConfig {
    /// Worker threads; 0 = one per CPU
    #[serde(default)]
    pub jobs: usize,
}

/// Directory-scan convention: `<root>/<platform>/**/<name>.<ext>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub root: PathBuf,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

pub(crate) fn default_extensions() -> Vec<String> {
    vec!["svg".to_string()]
}

/// One `[[asset]]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetSpec {
    pub platform: String,
    pub name: String,
    pub source: PathBuf,

    /// Defaults to the source file extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    /// Header path relative to the output root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Parsed `assetgen.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub header: HeaderConfig,

    #[serde(default)]
    pub validate: ValidateConfig,

    #[serde(default)]
    pub run: RunConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan: Option<ScanConfig>,

    #[serde(default, rename = "asset")]
    pub assets: Vec<AssetSpec>,
}

impl Manifest {
    /// Load a manifest from a TOML file
    pub fn load(path: &Path) -> AssetgenResult<Self> {
        let (manifest, _warnings) = loader::load_with_warnings(path)?;
        Ok(manifest)
    }

    /// Load a manifest and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> AssetgenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ASSETGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Header template built from `[header]`, or the default license
    pub fn template(&self) -> HeaderTemplate {
        match &self.header.sections {
            Some(sections) => HeaderTemplate::new(sections.clone()),
            None => HeaderTemplate::default(),
        }
    }
}
