//! Event types for `--json` output.
//!
//! Every line carries an `event` field: `start`, `entry`, `asset`, `warning`,
//! `error` or `complete`.

use serde::Serialize;

use assetgen::{AssetEntry, AssetgenError, EntryOutcome, EntryStatus, RunReport};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub entries: usize,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, entries: usize) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            entries,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

/// Outcome of one entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub status: &'static str,
    pub platform: &'a str,
    pub constant: String,
    pub source: String,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl<'a> EntryEvent<'a> {
    pub fn from_outcome(command: &'a str, outcome: &'a EntryOutcome) -> Self {
        let entry = &outcome.entry;
        let (created, error) = match &outcome.status {
            EntryStatus::Written { created } => (Some(*created), None),
            EntryStatus::Failed(err) => (
                None,
                Some(ErrorInfo {
                    code: err.code(),
                    message: err.to_string(),
                }),
            ),
            _ => (None, None),
        };

        Self {
            event: "entry",
            command,
            status: outcome.status.label(),
            platform: entry.platform().as_str(),
            constant: entry.constant_name(),
            source: entry.source().display().to_string(),
            output: entry.output().display().to_string(),
            created,
            hash: outcome.hash.as_ref().map(|h| h.as_str()),
            delimiter: outcome.delimiter.as_ref().map(|d| d.as_str()),
            error,
            diff: None,
        }
    }

    pub fn with_diff(mut self, diff: String) -> Self {
        self.diff = Some(diff);
        self
    }
}

/// A resolved entry, emitted by `list`.
#[derive(Debug, Clone, Serialize)]
pub struct AssetEvent<'a> {
    pub event: &'static str,
    pub platform: &'a str,
    pub name: &'a str,
    pub constant: String,
    pub source: String,
    pub output: String,
}

impl<'a> AssetEvent<'a> {
    pub fn new(entry: &'a AssetEntry) -> Self {
        Self {
            event: "asset",
            platform: entry.platform().as_str(),
            name: entry.name().as_str(),
            constant: entry.constant_name(),
            source: entry.source().display().to_string(),
            output: entry.output().display().to_string(),
        }
    }
}

/// Non-fatal problem (unknown manifest key, oversized header line).
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command,
            message: message.into(),
        }
    }
}

/// Run-level failure; nothing was processed.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub code: &'static str,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
        }
    }

    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<AssetgenError>() {
            Some(err) => Self::new(err.code(), err.to_string()),
            None => Self::new("internal", err.to_string()),
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub written: usize,
    pub unchanged: usize,
    pub stale: usize,
    pub failed: usize,
    pub cancelled: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn from_report(command: &'a str, report: &RunReport) -> Self {
        Self {
            event: "complete",
            command,
            success: report.is_success(),
            written: report.written_count(),
            unchanged: report.unchanged_count(),
            stale: report.stale_count(),
            failed: report.failed_count(),
            cancelled: report.cancelled_count(),
            duration_ms: None,
        }
    }

    /// Completion for commands that do not process entries
    pub fn listed(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            written: 0,
            unchanged: 0,
            stale: 0,
            failed: 0,
            cancelled: 0,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}
