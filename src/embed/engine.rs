//! Embed engine
//!
//! Processes every entry of a plan in parallel. Each entry is independent:
//! its own source, its own header, its own outcome.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;

use crate::domain::entities::{AssetEntry, EmbeddedAsset, GeneratedHeader};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::services::check_well_formed;
use crate::error::EntryError;

use super::plan::EmbedPlan;
use super::report::{EntryOutcome, EntryStatus, RunReport};

/// What to do when a generated header differs from the file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Replace the file
    #[default]
    Write,
    /// Report it as stale, touch nothing
    Check,
}

/// Knobs for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedOptions {
    pub mode: Mode,
    /// Worker threads; 0 uses rayon's global pool
    pub jobs: usize,
    /// Run the XML well-formedness check on `svg` entries
    pub validate_svg: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Write,
            jobs: 0,
            validate_svg: true,
        }
    }
}

/// Runs a plan against a file system
pub struct EmbedEngine<F: FileSystem> {
    fs: F,
    options: EmbedOptions,
    cancel: Arc<AtomicBool>,
}

impl<F: FileSystem> EmbedEngine<F> {
    pub fn new(fs: F, options: EmbedOptions) -> Self {
        Self {
            fs,
            options,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share a cancellation flag (set from a signal handler). Entries that
    /// have not started when the flag is raised are reported as cancelled.
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Process every entry and collect the outcomes
    pub fn run(&self, plan: &EmbedPlan) -> RunReport {
        let outcomes = if self.options.jobs == 0 {
            self.process_all(plan)
        } else {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.jobs)
                .build()
            {
                Ok(pool) => pool.install(|| self.process_all(plan)),
                Err(_) => self.process_all(plan),
            }
        };
        RunReport::new(self.options.mode, outcomes)
    }

    fn process_all(&self, plan: &EmbedPlan) -> Vec<EntryOutcome> {
        plan.entries()
            .par_iter()
            .map(|entry| self.process(plan, entry))
            .collect()
    }

    fn process(&self, plan: &EmbedPlan, entry: &AssetEntry) -> EntryOutcome {
        if self.cancel.load(Ordering::SeqCst) {
            return EntryOutcome::new(entry.clone(), EntryStatus::Cancelled);
        }
        match self.embed(plan, entry) {
            Ok(outcome) => outcome,
            Err(err) => EntryOutcome::new(entry.clone(), EntryStatus::Failed(err)),
        }
    }

    fn embed(&self, plan: &EmbedPlan, entry: &AssetEntry) -> Result<EntryOutcome, EntryError> {
        let source_error = |reason: String| EntryError::SourceRead {
            path: entry.source().to_path_buf(),
            reason,
        };

        let bytes = self
            .fs
            .read(entry.source())
            .map_err(|e| source_error(e.reason()))?;
        let payload = String::from_utf8(bytes).map_err(|e| {
            source_error(format!(
                "not valid UTF-8 (byte {})",
                e.utf8_error().valid_up_to()
            ))
        })?;

        if self.options.validate_svg && entry.suffix().as_str().eq_ignore_ascii_case("svg") {
            check_well_formed(&payload).map_err(|e| EntryError::InvalidAsset {
                path: entry.source().to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        let asset = EmbeddedAsset::new(entry.constant_name(), payload);
        let header = GeneratedHeader::compose(entry, &asset, plan.template())?;

        let output_error = |reason: String| EntryError::OutputWrite {
            path: header.path().to_path_buf(),
            reason,
        };
        let existing = self
            .fs
            .read_existing(header.path())
            .map_err(|e| output_error(e.reason()))?;

        let status = if header.matches(existing.as_deref()) {
            EntryStatus::Unchanged
        } else {
            match self.options.mode {
                Mode::Write => {
                    self.fs
                        .write_atomic(header.path(), header.content().as_bytes())
                        .map_err(|e| output_error(e.reason()))?;
                    EntryStatus::Written {
                        created: existing.is_none(),
                    }
                }
                Mode::Check => EntryStatus::Stale {
                    previous: existing.map(|b| String::from_utf8_lossy(&b).into_owned()),
                    generated: header.content().to_string(),
                },
            }
        };

        Ok(EntryOutcome::new(entry.clone(), status)
            .with_details(asset.hash().clone(), header.delimiter().clone()))
    }
}
