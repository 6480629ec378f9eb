//! Domain Entities
//!
//! - `AssetEntry` - one manifest line: where an asset comes from and goes to
//! - `EmbeddedAsset` - the verbatim payload read for an entry
//! - `GeneratedHeader` - the composed header text, ready to compare or write

mod asset_entry;
mod embedded_asset;
mod generated_header;

pub use asset_entry::AssetEntry;
pub use embedded_asset::EmbeddedAsset;
pub use generated_header::GeneratedHeader;
