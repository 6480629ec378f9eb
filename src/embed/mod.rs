//! Asset embedding
//!
//! Flow per run:
//! 1. [`EmbedPlan`] - validated entries, duplicates rejected up front
//! 2. [`EmbedEngine`] - one task per entry on a rayon pool:
//!    read source → check → pick delimiter → compose → compare → write-if-changed
//! 3. [`RunReport`] - every outcome, sorted by output path
//!
//! Entry failures never stop sibling entries; they are collected into the
//! report.

mod engine;
mod plan;
mod report;

pub use engine::{EmbedEngine, EmbedOptions, Mode};
pub use plan::EmbedPlan;
pub use report::{EntryOutcome, EntryStatus, RunReport};
