//! Manifest loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetgenError, AssetgenResult};

use super::types::Manifest;

/// Non-fatal manifest warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load a manifest and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AssetgenResult<(Manifest, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| AssetgenError::ManifestParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let manifest: Manifest = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssetgenError::ManifestParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((manifest, warnings))
}

/// Apply environment variable overrides (ASSETGEN_* prefix)
pub fn with_env_overrides(manifest: Manifest) -> Manifest {
    with_env_overrides_from(manifest, |key| std::env::var(key).ok())
}

/// Apply overrides read through `get_env`
pub fn with_env_overrides_from(
    mut manifest: Manifest,
    get_env: impl Fn(&str) -> Option<String>,
) -> Manifest {
    // ASSETGEN_OUTPUT_ROOT
    if let Some(root) = get_env("ASSETGEN_OUTPUT_ROOT") {
        if !root.trim().is_empty() {
            manifest.output.root = PathBuf::from(root);
        }
    }

    // ASSETGEN_JOBS (ignored unless a valid count)
    if let Some(jobs) = get_env("ASSETGEN_JOBS") {
        if let Ok(jobs) = jobs.trim().parse::<usize>() {
            manifest.run.jobs = jobs;
        }
    }

    // ASSETGEN_VALIDATE_SVG
    if let Some(val) = get_env("ASSETGEN_VALIDATE_SVG") {
        manifest.validate.svg = val.to_lowercase() != "false" && val != "0";
    }

    manifest
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "root",
        "dir",
        "header",
        "sections",
        "validate",
        "svg",
        "run",
        "jobs",
        "scan",
        "extensions",
        "asset",
        "platform",
        "name",
        "source",
        "suffix",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
