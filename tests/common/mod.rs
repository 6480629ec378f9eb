//! Common test utilities for assetgen integration tests.
//!
//! - `TestEnv`: isolated project directory plus helpers to run the CLI
//! - Fixtures: reusable manifests and SVG payloads

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
