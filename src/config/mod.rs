//! Manifest handling
//!
//! Settings are layered, highest priority first:
//! 1. CLI flags (`--out`, `--scan`, `--jobs`)
//! 2. Environment variables (`ASSETGEN_*`)
//! 3. Manifest file (`assetgen.toml`)
//! 4. Built-in defaults
//!
//! Relative paths inside the manifest are resolved against the manifest's
//! directory; CLI paths against the working directory.

mod loader;
mod resolve;
mod scan;
mod types;

pub use loader::{with_env_overrides_from, ConfigWarning};
pub use resolve::{build_plan, Overrides};
pub use scan::{scan_assets, ScannedAsset};
pub use types::{
    AssetSpec, HeaderConfig, Manifest, OutputConfig, RunConfig, ScanConfig, ValidateConfig,
};

/// File name looked up in the working directory when `--manifest` is absent
pub const DEFAULT_MANIFEST: &str = "assetgen.toml";
