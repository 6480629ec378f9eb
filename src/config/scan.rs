//! Directory-scan convention
//!
//! `<root>/<platform>/<dirs...>/<name>.<ext>` becomes an entry for
//! `platform`, with `<dirs...>` mirrored under the output root. Files directly
//! in `<root>` have no platform and are ignored, as are hidden files.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{AssetgenError, AssetgenResult};

/// An asset discovered on disk, before name validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedAsset {
    pub platform: String,
    pub name: String,
    pub suffix: String,
    pub source: PathBuf,
    /// Directories between the platform directory and the file
    pub relative_dir: PathBuf,
}

/// Walk `root` for files whose extension is in `extensions` (case-insensitive).
/// Results are sorted by path.
pub fn scan_assets(root: &Path, extensions: &[String]) -> AssetgenResult<Vec<ScannedAsset>> {
    if !root.is_dir() {
        return Err(AssetgenError::Scan {
            path: root.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    let mut found = Vec::new();
    for result in walker {
        let entry = result.map_err(|e| AssetgenError::Scan {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let Some(suffix) = extensions.iter().find(|x| x.eq_ignore_ascii_case(ext)) else {
            continue;
        };
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        let mut dirs = relative
            .parent()
            .map(|p| p.components().map(|c| c.as_os_str().to_owned()).collect::<Vec<_>>())
            .unwrap_or_default();
        if dirs.is_empty() {
            continue;
        }
        let platform = dirs.remove(0).to_string_lossy().into_owned();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        found.push(ScannedAsset {
            platform,
            name,
            suffix: suffix.clone(),
            source: path.to_path_buf(),
            relative_dir: dirs.iter().collect(),
        });
    }

    Ok(found)
}
