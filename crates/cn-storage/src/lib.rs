//! Content store abstraction for the coursenav engine.
//!
//! The navigation builder reads the content tree through the [`ContentStore`]
//! trait instead of touching the filesystem directly. This keeps the scanner
//! testable and lets non-filesystem contexts fall back to the static
//! navigation tree.
//!
//! # Path Convention
//!
//! All path parameters are **relative to the store root**:
//! - `""` - the content root itself
//! - `"overview"` - a top-level directory or file
//! - `"react/nextjs"` - a nested entry
//!
//! Stores are read-only: the engine never writes back to the content tree.

mod fs;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod store;

pub use fs::FsStore;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockStore;
pub use store::{ContentStore, DirEntry, StoreError, StoreErrorKind};
