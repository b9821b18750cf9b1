//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use cn_storage::ContentStore;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Content store backing the navigation scan.
    pub(crate) store: Arc<dyn ContentStore>,
    /// Application version reported by the health endpoint.
    pub(crate) version: String,
}
