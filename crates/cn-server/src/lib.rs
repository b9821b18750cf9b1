//! HTTP server for the coursenav engine.
//!
//! This crate provides a native Rust HTTP server using axum, serving the
//! sectioned navigation model as JSON to the course website's sidebar. The
//! model is rebuilt from the content tree on every request; failures are
//! absorbed into the static fallback, so the API never returns an error
//! status.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use cn_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7979,
//!         source_dir: PathBuf::from("content"),
//!         verbose: false,
//!         version: "1.0.0".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use cn_storage::{ContentStore, FsStore};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Course content source directory.
    pub source_dir: std::path::PathBuf,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7979,
            source_dir: std::path::PathBuf::from("content"),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store: Arc<dyn ContentStore> = Arc::new(FsStore::new(config.source_dir.clone()));

    let state = Arc::new(AppState {
        store,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from a loaded coursenav config.
#[must_use]
pub fn server_config_from_config(
    config: &cn_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.content_resolved.source_dir.clone(),
        verbose,
        version,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7979);
        assert_eq!(config.source_dir, std::path::PathBuf::from("content"));
    }

    #[test]
    fn test_server_config_from_config() {
        let loaded = cn_config::Config::default();

        let config = server_config_from_config(&loaded, "9.9.9".to_owned(), true);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7979);
        assert!(config.verbose);
        assert_eq!(config.version, "9.9.9");
    }
}
