//! AssetEntry entity - one asset-to-header mapping
//!
//! Entries are derived from the manifest (or a directory scan) at the start
//! of a run and never persisted.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Identifier;

/// Extension shared by every generated header
pub const HEADER_EXTENSION: &str = ".gen.h";

/// A source asset and the header generated from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    platform: Identifier,
    name: Identifier,
    suffix: Identifier,
    source: PathBuf,
    output: PathBuf,
}

impl AssetEntry {
    /// Create a new entry; `output` is the full header path
    pub fn new(
        platform: Identifier,
        name: Identifier,
        suffix: Identifier,
        source: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            platform,
            name,
            suffix,
            source: source.into(),
            output: output.into(),
        }
    }

    /// Conventional header file name: `<name>_<suffix>.gen.h`
    pub fn header_file_name(name: &Identifier, suffix: &Identifier) -> String {
        format!("{}_{}{}", name, suffix, HEADER_EXTENSION)
    }

    /// Constant bound in the header: `_<platform>_<name>_<suffix>`
    ///
    /// Depends only on the entry's identity, never on the payload, so
    /// references in consuming code survive content changes.
    pub fn constant_name(&self) -> String {
        format!("_{}_{}_{}", self.platform, self.name, self.suffix)
    }

    pub fn platform(&self) -> &Identifier {
        &self.platform
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn suffix(&self) -> &Identifier {
        &self.suffix
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// File name of the header, used in the copyright block title
    pub fn file_name(&self) -> String {
        self.output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| Self::header_file_name(&self.name, &self.suffix))
    }
}
