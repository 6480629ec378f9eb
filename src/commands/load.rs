//! Manifest discovery and plan resolution shared by all commands

use std::path::{Path, PathBuf};

use anyhow::Result;
use assetgen::config::{build_plan, ConfigWarning, DEFAULT_MANIFEST};
use assetgen::{AssetgenError, EmbedPlan, Manifest, Overrides};

use crate::cli::SourceArgs;

pub struct Loaded {
    pub plan: EmbedPlan,
    pub manifest: Manifest,
    /// `None` when running from `--scan` alone
    pub manifest_path: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Resolve `--manifest`/`--scan`/`--out` into a validated plan.
///
/// Without `--manifest`, `./assetgen.toml` is used when it exists; otherwise
/// `--scan` alone runs with built-in defaults.
pub fn load_plan(args: &SourceArgs) -> Result<Loaded> {
    let cwd = std::env::current_dir()?;
    let manifest_path = match &args.manifest {
        Some(path) => Some(path.clone()),
        None => {
            let default = cwd.join(DEFAULT_MANIFEST);
            default.is_file().then_some(default)
        }
    };

    let (manifest, config_warnings, base_dir) = match &manifest_path {
        Some(path) => {
            let (manifest, warnings) = Manifest::load_with_warnings(path)?;
            (manifest, warnings, manifest_dir(path, &cwd))
        }
        None if args.scan.is_some() => (Manifest::default(), Vec::new(), cwd.clone()),
        None => {
            return Err(AssetgenError::ManifestParse {
                file: cwd.join(DEFAULT_MANIFEST),
                message: "manifest not found".to_string(),
            }
            .into())
        }
    };

    let manifest = manifest.with_env_overrides();
    let overrides = Overrides {
        output_root: args.out.clone(),
        scan_root: args.scan.clone(),
    };
    let plan = build_plan(&manifest, &base_dir, &overrides)?;

    let mut warnings: Vec<String> = config_warnings.iter().map(ConfigWarning::to_string).collect();
    warnings.extend(plan.warnings());

    Ok(Loaded {
        plan,
        manifest,
        manifest_path,
        warnings,
    })
}

fn manifest_dir(path: &Path, cwd: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => cwd.to_path_buf(),
    }
}
