//! Manifest resolution
//!
//! Turns a parsed manifest (plus CLI overrides) into validated
//! [`AssetEntry`] values and an [`EmbedPlan`]. Every configuration problem
//! surfaces here, before any source is read or header written.

use std::path::{Component, Path, PathBuf};

use crate::domain::entities::AssetEntry;
use crate::domain::value_objects::Identifier;
use crate::embed::EmbedPlan;
use crate::error::{AssetgenError, AssetgenResult};

use super::scan::scan_assets;
use super::types::{default_extensions, AssetSpec, Manifest};

/// CLI-level overrides; paths are relative to the working directory
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output_root: Option<PathBuf>,
    pub scan_root: Option<PathBuf>,
}

/// Resolve `manifest` into a plan. `base_dir` anchors manifest-relative paths.
pub fn build_plan(
    manifest: &Manifest,
    base_dir: &Path,
    overrides: &Overrides,
) -> AssetgenResult<EmbedPlan> {
    let output_root = match &overrides.output_root {
        Some(root) => root.clone(),
        None => base_dir.join(&manifest.output.root),
    };

    let mut entries = Vec::new();
    for spec in &manifest.assets {
        entries.push(resolve_spec(spec, manifest, base_dir, &output_root)?);
    }

    let scan_root = match (&overrides.scan_root, &manifest.scan) {
        (Some(root), _) => Some(root.clone()),
        (None, Some(scan)) => Some(base_dir.join(&scan.root)),
        (None, None) => None,
    };
    if let Some(scan_root) = scan_root {
        let extensions = manifest
            .scan
            .as_ref()
            .map(|s| s.extensions.clone())
            .unwrap_or_else(default_extensions);
        for found in scan_assets(&scan_root, &extensions)? {
            let platform = identifier("platform", &found.platform, &found.source)?;
            let name = identifier("name", &found.name, &found.source)?;
            let suffix = identifier("suffix", &found.suffix, &found.source)?;
            let file_name = AssetEntry::header_file_name(&name, &suffix);
            let output = output_root
                .join(platform.as_str())
                .join(&found.relative_dir)
                .join(file_name);
            entries.push(AssetEntry::new(platform, name, suffix, found.source, output));
        }
    }

    EmbedPlan::new(output_root, entries, manifest.template())
}

fn resolve_spec(
    spec: &AssetSpec,
    manifest: &Manifest,
    base_dir: &Path,
    output_root: &Path,
) -> AssetgenResult<AssetEntry> {
    let platform = identifier("platform", &spec.platform, &spec.source)?;
    let name = identifier("name", &spec.name, &spec.source)?;
    let suffix_str = match &spec.suffix {
        Some(suffix) => suffix.clone(),
        None => spec
            .source
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default(),
    };
    let suffix = identifier("suffix", &suffix_str, &spec.source)?;

    let relative = match &spec.output {
        Some(output) => {
            let relative = confine(output, output_root)?;
            if relative.as_os_str().is_empty() {
                return Err(AssetgenError::PathEscape {
                    path: output.clone(),
                    root: output_root.to_path_buf(),
                });
            }
            relative
        }
        None => {
            let dir = manifest.output.dir.replace("{platform}", platform.as_str());
            confine(Path::new(&dir), output_root)?.join(AssetEntry::header_file_name(&name, &suffix))
        }
    };

    Ok(AssetEntry::new(
        platform,
        name,
        suffix,
        base_dir.join(&spec.source),
        output_root.join(relative),
    ))
}

fn identifier(field: &'static str, value: &str, asset: &Path) -> AssetgenResult<Identifier> {
    let parsed = match field {
        "platform" => Identifier::parse_platform(value),
        _ => Identifier::parse(value),
    };
    parsed.map_err(|reason| AssetgenError::InvalidName {
        field,
        value: value.to_string(),
        asset: asset.to_path_buf(),
        reason,
    })
}

/// Normalize a path that must stay inside `root`: no absolute paths, no `..`
fn confine(path: &Path, root: &Path) -> AssetgenResult<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(AssetgenError::PathEscape {
                    path: path.to_path_buf(),
                    root: root.to_path_buf(),
                });
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confine_normalizes_curdir() {
        let out = confine(Path::new("./ios/./export"), Path::new("out")).unwrap();
        assert_eq!(out, PathBuf::from("ios/export"));
    }

    #[test]
    fn confine_rejects_parent_dir() {
        let err = confine(Path::new("ios/../../etc"), Path::new("out")).unwrap_err();
        assert!(matches!(err, AssetgenError::PathEscape { .. }));
    }

    #[test]
    fn confine_rejects_absolute() {
        let err = confine(Path::new("/etc/passwd"), Path::new("out")).unwrap_err();
        assert!(matches!(err, AssetgenError::PathEscape { .. }));
    }
}
