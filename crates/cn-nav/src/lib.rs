//! Navigation tree building for coursenav.
//!
//! This crate turns a content tree into the sectioned sidebar model served
//! to the UI: it scans directories through a [`ContentStore`], formats
//! titles, extracts page metadata, sorts items by keyword priority, and
//! buckets the top level into named sections. When the tree cannot be read
//! at all, a static fallback tree is substituted.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use cn_nav::build_navigation;
//! use cn_storage::FsStore;
//!
//! let store = FsStore::new(PathBuf::from("content"));
//! let sections = build_navigation(&store);
//! let json = serde_json::to_string(&sections).unwrap();
//! ```

pub(crate) mod categorize;
pub(crate) mod fallback;
pub(crate) mod metadata;
pub(crate) mod model;
pub(crate) mod priority;
pub(crate) mod scan;
pub(crate) mod title;

pub use categorize::categorize;
pub use fallback::fallback_navigation;
pub use metadata::{MetadataReader, PageMetadata};
pub use model::{GROUPING_HREF, NavItem, NavSection};
pub use priority::{compare_items, priority, DEFAULT_PRIORITY, LAST_PRIORITY};
pub use scan::Scanner;
pub use title::format_title;

use cn_storage::ContentStore;

/// Build the full sectioned navigation model for a content store.
///
/// Scans the store root and categorizes the result. When the root cannot be
/// listed, the failure is logged and the static fallback tree is returned,
/// so the call never fails.
#[must_use]
pub fn build_navigation(store: &dyn ContentStore) -> Vec<NavSection> {
    let scanner = Scanner::new();
    match scanner.scan_root(store) {
        Ok(items) => categorize(items),
        Err(e) => {
            tracing::error!(error = %e, "Content scan failed, serving fallback navigation");
            fallback_navigation()
        }
    }
}
