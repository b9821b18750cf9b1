//! Mock store implementation for testing.
//!
//! Provides [`MockStore`] for unit testing the navigation builder without
//! filesystem access.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::store::{ContentStore, DirEntry, StoreError, StoreErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// In-memory store for testing.
///
/// Holds directories and file contents in memory. Use the builder methods to
/// configure the mock with test data; intermediate directories are registered
/// automatically when a file is added.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use cn_storage::{ContentStore, MockStore};
///
/// let store = MockStore::new()
///     .with_file("overview/index.md", "# Overview\n\nContent.");
///
/// let entries = store.list(Path::new("")).unwrap();
/// assert!(store.exists(Path::new("overview/index.md")));
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    list_errors: BTreeSet<PathBuf>,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty directory, registering its ancestors.
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        self.register_ancestors(&path);
        self.dirs.insert(path);
        self
    }

    /// Add a file with content, registering its parent directories.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path: PathBuf = path.into();
        self.register_ancestors(&path);
        self.files.insert(path, content.into());
        self
    }

    /// Make `list` fail with a permission error for the given directory.
    #[must_use]
    pub fn with_list_error(mut self, dir: impl Into<PathBuf>) -> Self {
        self.list_errors.insert(dir.into());
        self
    }

    /// Register all ancestor directories of a path.
    fn register_ancestors(&mut self, path: &Path) {
        let mut current = path.parent();
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }
}

impl ContentStore for MockStore {
    fn list(&self, dir: &Path) -> Result<Vec<DirEntry>, StoreError> {
        if self.list_errors.contains(dir) {
            return Err(StoreError::new(StoreErrorKind::PermissionDenied)
                .with_path(dir)
                .with_backend(BACKEND));
        }

        let is_root = dir.as_os_str().is_empty();
        if !is_root && !self.dirs.contains(dir) {
            return Err(StoreError::not_found(dir).with_backend(BACKEND));
        }

        let child_of = |path: &Path| {
            if is_root {
                path.parent().is_some_and(|p| p.as_os_str().is_empty())
            } else {
                path.parent() == Some(dir)
            }
        };

        let entry_name = |path: &Path| {
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        };

        let mut entries: Vec<DirEntry> = self
            .dirs
            .iter()
            .filter(|d| child_of(d))
            .map(|d| DirEntry {
                name: entry_name(d),
                is_dir: true,
            })
            .chain(self.files.keys().filter(|f| child_of(f)).map(|f| DirEntry {
                name: entry_name(f),
                is_dir: false,
            }))
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries)
    }

    fn read(&self, path: &Path) -> Result<String, StoreError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::not_found(path).with_backend(BACKEND))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.dirs.contains(path)
    }
}
