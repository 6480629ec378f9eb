//! Error types for assetgen
//!
//! Two levels, both built with `thiserror`:
//! - [`AssetgenError`]: the job description itself is invalid. Raised before
//!   any entry is processed and aborts the whole run.
//! - [`EntryError`]: one entry failed. Collected per entry; sibling entries
//!   keep running.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::InvalidIdentifier;

/// Result type alias for run-level operations
pub type AssetgenResult<T> = Result<T, AssetgenError>;

/// Run-level error: nothing has been written when one of these is returned
#[derive(Error, Debug)]
pub enum AssetgenError {
    /// Manifest missing, unreadable, or not valid TOML for the schema
    #[error("invalid manifest {file}: {message}")]
    ManifestParse { file: PathBuf, message: String },

    /// Two entries resolve to the same header path
    #[error("output path '{output}' is produced by both {first} and {second}")]
    DuplicateOutput {
        output: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    /// Two entries of one platform resolve to the same constant
    #[error("constant '{constant}' is declared by both {first} and {second}")]
    DuplicateSymbol {
        constant: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Platform, name or suffix is not usable inside a C identifier
    #[error("invalid {field} '{value}' for {asset}: {reason}")]
    InvalidName {
        field: &'static str,
        value: String,
        asset: PathBuf,
        reason: InvalidIdentifier,
    },

    /// Output path is absolute or climbs out of the output root
    #[error("path '{path}' escapes output root '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Directory scan could not walk the asset tree
    #[error("cannot scan {path}: {message}")]
    Scan { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssetgenError {
    /// Stable machine-readable code, used in JSON output
    pub fn code(&self) -> &'static str {
        match self {
            AssetgenError::ManifestParse { .. } => "manifest_parse",
            AssetgenError::DuplicateOutput { .. } => "duplicate_output",
            AssetgenError::DuplicateSymbol { .. } => "duplicate_symbol",
            AssetgenError::InvalidName { .. } => "invalid_name",
            AssetgenError::PathEscape { .. } => "path_escape",
            AssetgenError::Scan { .. } => "scan",
            AssetgenError::Io(_) => "io",
        }
    }
}

/// Per-entry failure, reported alongside the entry it belongs to
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// Source missing, unreadable, or not UTF-8
    #[error("cannot read source {path}: {reason}")]
    SourceRead { path: PathBuf, reason: String },

    /// Source failed the well-formedness check
    #[error("{path} is not well-formed: {reason}")]
    InvalidAsset { path: PathBuf, reason: String },

    /// Every delimiter candidate occurs in the payload
    #[error("no safe raw string delimiter for {path} after {attempts} candidates")]
    DelimiterExhausted { path: PathBuf, attempts: usize },

    /// Destination not writable or rename failed
    #[error("cannot write {path}: {reason}")]
    OutputWrite { path: PathBuf, reason: String },
}

impl EntryError {
    /// Stable machine-readable code, used in JSON output
    pub fn code(&self) -> &'static str {
        match self {
            EntryError::SourceRead { .. } => "source_read",
            EntryError::InvalidAsset { .. } => "invalid_asset",
            EntryError::DelimiterExhausted { .. } => "delimiter_exhausted",
            EntryError::OutputWrite { .. } => "output_write",
        }
    }
}
