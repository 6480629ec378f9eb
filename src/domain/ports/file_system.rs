//! FileSystem port - abstraction over file I/O operations
//!
//! The embed engine reads sources and existing headers and writes new
//! headers through this trait, so it can run against the local disk or an
//! in-memory mock.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(PathBuf, std::io::Error),
}

impl FsError {
    /// Classify an I/O error, keeping the path it happened on
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }

    /// Short reason without the path, for per-entry reports
    pub fn reason(&self) -> String {
        match self {
            FsError::NotFound(_) => "file not found".to_string(),
            FsError::PermissionDenied(_) => "permission denied".to_string(),
            FsError::Io(_, err) => err.to_string(),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "I/O error on {}: {}", path.display(), err),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with tempfile + rename writes
/// - `MemoryFs` - in-memory for tests
///
/// `Sync` because entries are processed on a thread pool.
pub trait FileSystem: Sync {
    /// Read a file as raw bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Read a file if it exists; `Ok(None)` when it does not
    fn read_existing(&self, path: &Path) -> FsResult<Option<Vec<u8>>> {
        match self.read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(FsError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Replace `path` with `content` so that readers never see a partial file.
    /// Missing parent directories are created.
    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()>;
}
