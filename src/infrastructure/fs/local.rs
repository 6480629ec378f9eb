//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Mode for headers that did not exist before (rw-r--r--)
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Local file system implementation
///
/// Writes go to a temporary file in the destination directory which is then
/// renamed over the target, so an interrupted run never leaves a partially
/// written header behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::from_io(e, path))
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(e, parent))?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(e, parent))?;
        let tmp_path = tmp.path().to_path_buf();
        tmp.write_all(content)
            .map_err(|e| FsError::from_io(e, &tmp_path))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| FsError::from_io(e, &tmp_path))?;
        carry_permissions(tmp.as_file(), path)?;

        tmp.persist(path)
            .map_err(|e| FsError::from_io(e.error, path))?;
        Ok(())
    }
}

/// Temp files are created private; give the header the mode of the file it
/// replaces, or a world-readable default.
#[cfg(unix)]
fn carry_permissions(file: &std::fs::File, target: &Path) -> FsResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match std::fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        Err(_) => std::fs::Permissions::from_mode(NEW_FILE_MODE),
    };
    file.set_permissions(permissions)
        .map_err(|e| FsError::from_io(e, target))
}

#[cfg(not(unix))]
fn carry_permissions(_file: &std::fs::File, _target: &Path) -> FsResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_and_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("logo_svg.gen.h");
        let fs = LocalFs::new();

        fs.write_atomic(&file, b"#pragma once\n").unwrap();
        let content = fs.read(&file).unwrap();

        assert_eq!(content, b"#pragma once\n");
    }

    #[test]
    fn local_fs_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("ios").join("export").join("logo_svg.gen.h");
        let fs = LocalFs::new();

        fs.write_atomic(&file, b"content").unwrap();

        assert!(file.exists());
    }

    #[test]
    fn local_fs_write_replaces_existing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.gen.h");
        let fs = LocalFs::new();

        std::fs::write(&file, "old").unwrap();
        fs.write_atomic(&file, b"new").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn local_fs_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        fs.write_atomic(&dir.path().join("a.gen.h"), b"x").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a.gen.h")]);
    }

    #[test]
    fn local_fs_read_existing_missing_is_none() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        assert!(fs
            .read_existing(&dir.path().join("missing.gen.h"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn local_fs_read_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        let err = fs.read(&dir.path().join("missing.svg")).unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn local_fs_read_existing_sees_written_content() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("exists.gen.h");
        let fs = LocalFs::new();

        assert_eq!(fs.read_existing(&file).unwrap(), None);
        fs.write_atomic(&file, b"content").unwrap();
        assert_eq!(fs.read_existing(&file).unwrap(), Some(b"content".to_vec()));
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let file = dir.path().join("a.gen.h");
        LocalFs::new().write_atomic(&file, b"x").unwrap();

        let mode = std::fs::metadata(&file).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, NEW_FILE_MODE);
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let file = dir.path().join("a.gen.h");
        std::fs::write(&file, "old").unwrap();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o664)).unwrap();

        LocalFs::new().write_atomic(&file, b"new").unwrap();

        let mode = std::fs::metadata(&file).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o664);
    }
}
