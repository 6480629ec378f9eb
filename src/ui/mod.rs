//! Terminal and NDJSON output for the CLI
//!
//! Everything printed by a command goes through this module: human output is
//! built from `primitives` and `views` and honors the [`context::UiContext`]
//! capabilities; `--json` output goes through `json`.

pub mod blocks;
pub mod ci;
pub mod components;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
