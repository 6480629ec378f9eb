//! Validated set of entries for one run

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::AssetEntry;
use crate::domain::services::HeaderTemplate;
use crate::error::{AssetgenError, AssetgenResult};

/// Entries with unique output paths and unique constants
#[derive(Debug, Clone)]
pub struct EmbedPlan {
    output_root: PathBuf,
    entries: Vec<AssetEntry>,
    template: HeaderTemplate,
}

impl EmbedPlan {
    /// Build a plan, rejecting entries that would collide on disk or in the
    /// symbol namespace. Nothing is written if this fails.
    pub fn new(
        output_root: impl Into<PathBuf>,
        entries: Vec<AssetEntry>,
        template: HeaderTemplate,
    ) -> AssetgenResult<Self> {
        // Keyed on the lowercased path: case-insensitive file systems map
        // `Logo_svg.gen.h` and `logo_svg.gen.h` to the same file.
        let mut outputs: HashMap<String, &Path> = HashMap::new();
        let mut constants: HashMap<String, &Path> = HashMap::new();

        for entry in &entries {
            let folded = entry.output().to_string_lossy().to_lowercase();
            if let Some(first) = outputs.insert(folded, entry.source()) {
                return Err(AssetgenError::DuplicateOutput {
                    output: entry.output().to_path_buf(),
                    first: first.to_path_buf(),
                    second: entry.source().to_path_buf(),
                });
            }
            if let Some(first) = constants.insert(entry.constant_name(), entry.source()) {
                return Err(AssetgenError::DuplicateSymbol {
                    constant: entry.constant_name(),
                    first: first.to_path_buf(),
                    second: entry.source().to_path_buf(),
                });
            }
        }

        Ok(Self {
            output_root: output_root.into(),
            entries,
            template,
        })
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    pub fn template(&self) -> &HeaderTemplate {
        &self.template
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cosmetic problems with the copyright frame; headers are still written
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings: Vec<String> = self
            .template
            .overflowing_lines()
            .into_iter()
            .map(|line| format!("header line wider than 70 columns: \"{}\"", line))
            .collect();
        for entry in &self.entries {
            let file_name = entry.file_name();
            if !HeaderTemplate::fits_title(&file_name) {
                warnings.push(format!(
                    "file name too long for copyright header: {}",
                    file_name
                ));
            }
        }
        warnings
    }
}
