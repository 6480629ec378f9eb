//! In-memory file system for engine tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Shared in-memory file map with a write counter
#[derive(Clone, Default)]
pub struct MemoryFs {
    pub files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    writes: Arc<AtomicUsize>,
    read_only: Arc<Mutex<Vec<PathBuf>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.as_bytes().to_vec());
        self
    }

    /// Make writes under `prefix` fail with permission denied
    pub fn deny_writes_under(self, prefix: impl Into<PathBuf>) -> Self {
        self.read_only.lock().unwrap().push(prefix.into());
        self
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path.as_ref())
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        if self
            .read_only
            .lock()
            .unwrap()
            .iter()
            .any(|prefix| path.starts_with(prefix))
        {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}
