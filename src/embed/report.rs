//! Run report

use crate::domain::entities::AssetEntry;
use crate::domain::value_objects::{ContentHash, Delimiter};
use crate::error::EntryError;

use super::engine::Mode;

/// Result of processing one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    /// Header written; `created` when no file existed before
    Written { created: bool },
    /// Header on disk already identical, not touched
    Unchanged,
    /// Check mode: header missing or different
    Stale {
        previous: Option<String>,
        generated: String,
    },
    Failed(EntryError),
    /// Skipped after cancellation was requested
    Cancelled,
}

impl EntryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::Written { .. } => "written",
            EntryStatus::Unchanged => "unchanged",
            EntryStatus::Stale { .. } => "stale",
            EntryStatus::Failed(_) => "failed",
            EntryStatus::Cancelled => "cancelled",
        }
    }
}

/// One entry with what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub entry: AssetEntry,
    /// Payload hash, when the source could be read
    pub hash: Option<ContentHash>,
    /// Delimiter used, when a header was composed
    pub delimiter: Option<Delimiter>,
    pub status: EntryStatus,
}

impl EntryOutcome {
    pub fn new(entry: AssetEntry, status: EntryStatus) -> Self {
        Self {
            entry,
            hash: None,
            delimiter: None,
            status,
        }
    }

    pub fn with_details(mut self, hash: ContentHash, delimiter: Delimiter) -> Self {
        self.hash = Some(hash);
        self.delimiter = Some(delimiter);
        self
    }
}

/// All outcomes of a run, ordered by output path
#[derive(Debug, Clone)]
pub struct RunReport {
    mode: Mode,
    outcomes: Vec<EntryOutcome>,
}

impl RunReport {
    pub fn new(mode: Mode, mut outcomes: Vec<EntryOutcome>) -> Self {
        outcomes.sort_by(|a, b| a.entry.output().cmp(b.entry.output()));
        Self { mode, outcomes }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    fn count(&self, pred: impl Fn(&EntryStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }

    pub fn written_count(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Written { .. }))
    }

    pub fn unchanged_count(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Unchanged))
    }

    pub fn stale_count(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Stale { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Failed(_)))
    }

    pub fn cancelled_count(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Cancelled))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&AssetEntry, &EntryError)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            EntryStatus::Failed(err) => Some((&o.entry, err)),
            _ => None,
        })
    }

    /// Every entry either written or already up to date
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0 && self.stale_count() == 0 && self.cancelled_count() == 0
    }

    /// 0 on success, 1 when any entry failed, is stale or was cancelled
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
