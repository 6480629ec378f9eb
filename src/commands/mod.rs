//! Command implementations
//!
//! Each command returns the process exit code; run-level errors bubble up as
//! `anyhow::Error` and are mapped by [`exit_code_for`].

pub mod diff;
pub mod generate;
pub mod list;
mod load;

use assetgen::AssetgenError;

/// Every entry succeeded
pub const EXIT_OK: i32 = 0;
/// One or more entries failed, are stale, or were cancelled
pub const EXIT_ENTRIES: i32 = 1;
/// The manifest or plan is invalid; nothing was processed
pub const EXIT_CONFIG: i32 = 2;

pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<AssetgenError>().is_some() {
        EXIT_CONFIG
    } else {
        EXIT_ENTRIES
    }
}
