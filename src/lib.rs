//! assetgen - embed text assets into generated C++ headers
//!
//! assetgen reads a manifest of `(platform, name, source)` entries, wraps
//! each source file (typically an SVG icon) verbatim into a raw string
//! literal, and writes one `*.gen.h` header per entry. Headers are only
//! rewritten when their content would change, so downstream builds are not
//! retriggered by no-op runs.

pub mod config;
pub mod domain;
pub mod embed;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::{Manifest, Overrides};
pub use domain::entities::{AssetEntry, EmbeddedAsset, GeneratedHeader};
pub use domain::services::HeaderTemplate;
pub use domain::value_objects::{choose_delimiter, ContentHash, Delimiter, DelimiterChoice};
pub use embed::{EmbedEngine, EmbedOptions, EmbedPlan, EntryOutcome, EntryStatus, Mode, RunReport};
pub use error::{AssetgenError, AssetgenResult, EntryError};
pub use infrastructure::fs::LocalFs;
