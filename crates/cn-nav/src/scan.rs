//! Recursive content-tree scanning.
//!
//! The scanner walks a [`ContentStore`] from its root, turning directories
//! into navigation items. A directory holding a recognized entry file is a
//! page; a directory without one is a grouping node kept only when it yields
//! children. Plain files never become items.
//!
//! Failure policy: a listing failure inside a subdirectory is logged and
//! absorbed as an empty subtree so the rest of the scan is unaffected. A
//! failure listing the root itself propagates, letting the caller substitute
//! the static fallback tree.

use std::path::Path;

use cn_storage::{ContentStore, DirEntry, StoreError};

use crate::metadata::MetadataReader;
use crate::model::{GROUPING_HREF, NavItem};
use crate::priority::compare_items;
use crate::title::format_title;

/// Non-content names ignored at every level.
const SKIP_NAMES: &[&str] = &["styles.css", "favicon.ico", "layout.html"];

/// File names that mark a directory as a navigable page, in probe order.
const ENTRY_FILES: &[&str] = &["index.md", "index.mdx", "page.md"];

/// Walks a content store and produces sorted navigation items.
///
/// Holds the [`MetadataReader`] so its compiled patterns are shared across
/// the whole walk.
pub struct Scanner {
    metadata: MetadataReader,
}

impl Scanner {
    /// Create a new scanner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: MetadataReader::new(),
        }
    }

    /// Scan the store from its root.
    ///
    /// # Errors
    ///
    /// Returns an error when the root listing itself fails. Failures below
    /// the root are absorbed per the subtree policy.
    pub fn scan_root(&self, store: &dyn ContentStore) -> Result<Vec<NavItem>, StoreError> {
        let entries = store.list(Path::new(""))?;
        Ok(self.scan_entries(store, Path::new(""), "", entries))
    }

    /// Scan a single directory, absorbing listing failures.
    ///
    /// `route_base` is the accumulated route of `dir` itself; children get
    /// `route_base` plus their own name segment.
    #[must_use]
    pub fn scan_directory(
        &self,
        store: &dyn ContentStore,
        dir: &Path,
        route_base: &str,
    ) -> Vec<NavItem> {
        match store.list(dir) {
            Ok(entries) => self.scan_entries(store, dir, route_base, entries),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Failed to scan directory");
                Vec::new()
            }
        }
    }

    /// Build sorted items from one level of directory entries.
    fn scan_entries(
        &self,
        store: &dyn ContentStore,
        dir: &Path,
        route_base: &str,
        entries: Vec<DirEntry>,
    ) -> Vec<NavItem> {
        let mut items = Vec::new();

        for entry in entries {
            if is_skipped(&entry.name) {
                continue;
            }

            // Plain files never become items; entry files are consumed by
            // the directory-level probe of their parent
            if !entry.is_dir {
                continue;
            }

            let full_path = dir.join(&entry.name);
            let route = format!("{route_base}/{}", entry.name);

            let entry_file = ENTRY_FILES
                .iter()
                .find(|name| store.exists(&full_path.join(name)));

            if let Some(name) = entry_file {
                let metadata = self.metadata.read(store, &full_path.join(name));

                let mut item = NavItem {
                    title: metadata
                        .title
                        .unwrap_or_else(|| format_title(&entry.name)),
                    href: normalize_route(&route),
                    children: Vec::new(),
                    order: metadata.order,
                };

                item.children = self.scan_directory(store, &full_path, &route);
                items.push(item);
            } else {
                let children = self.scan_directory(store, &full_path, &route);
                if !children.is_empty() {
                    items.push(NavItem {
                        title: format_title(&entry.name),
                        href: GROUPING_HREF.to_owned(),
                        children,
                        order: None,
                    });
                }
            }
        }

        items.sort_by(compare_items);

        items
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a directory entry is excluded from scanning.
fn is_skipped(name: &str) -> bool {
    name.starts_with('.') || SKIP_NAMES.contains(&name)
}

/// Map the route of a root-level page directory onto the site root.
fn normalize_route(route: &str) -> String {
    if route == "/page" {
        "/".to_owned()
    } else {
        route.to_owned()
    }
}
