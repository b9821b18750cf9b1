//! Filesystem store implementation.
//!
//! Provides [`FsStore`] for reading the content tree from the local
//! filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::{ContentStore, DirEntry, StoreError, StoreErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem store rooted at a content directory.
///
/// Directory listings are returned sorted by name so scans over an unchanged
/// tree are deterministic regardless of readdir order.
///
/// # Example
///
/// ```ignore
/// use std::path::{Path, PathBuf};
/// use cn_storage::{ContentStore, FsStore};
///
/// let store = FsStore::new(PathBuf::from("content"));
/// let entries = store.list(Path::new(""))?;
/// ```
pub struct FsStore {
    /// Root directory of the content tree.
    root: PathBuf,
}

impl FsStore {
    /// Create a new filesystem store.
    ///
    /// # Arguments
    ///
    /// * `root` - Root directory containing the content tree
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Validate that a path doesn't escape the store root.
    ///
    /// Rejects paths containing parent directory components (`..`) to prevent
    /// path traversal (e.g., `../../../etc/passwd`).
    fn validate_path(path: &Path) -> Result<(), StoreError> {
        let has_parent_dir = path
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir));

        if has_parent_dir {
            return Err(StoreError::new(StoreErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        Ok(())
    }
}

impl ContentStore for FsStore {
    fn list(&self, dir: &Path) -> Result<Vec<DirEntry>, StoreError> {
        Self::validate_path(dir)?;
        let full_path = self.root.join(dir);

        let read_dir = fs::read_dir(&full_path)
            .map_err(|e| StoreError::io(e, Some(dir.to_path_buf())).with_backend(BACKEND))?;

        let mut entries: Vec<DirEntry> = read_dir
            .filter_map(Result::ok)
            .map(|e| DirEntry {
                name: e.file_name().to_string_lossy().into_owned(),
                is_dir: e.file_type().is_ok_and(|t| t.is_dir()),
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries)
    }

    fn read(&self, path: &Path) -> Result<String, StoreError> {
        Self::validate_path(path)?;
        let full_path = self.root.join(path);

        fs::read_to_string(&full_path)
            .map_err(|e| StoreError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))
    }

    fn exists(&self, path: &Path) -> bool {
        if Self::validate_path(path).is_err() {
            return false;
        }
        self.root.join(path).exists()
    }
}
