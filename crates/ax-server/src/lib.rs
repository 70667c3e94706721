//! HTTP server for the Atomix docs site.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - Raw markdown from the document root (`/api/markdown/{path}`)
//! - Page resolution with breadcrumbs (`/api/pages/{path}`)
//! - The navigation tree (`/api/navigation`) and route list (`/api/routes`)
//!
//! Configured redirects are answered before routing.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use ax_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         docs_root: PathBuf::from("content"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use ax_config::Redirect;
use ax_content::DocumentRoot;
use ax_nav::{Navigation, NavigationError};

use crate::middleware::redirects::RedirectTable;
use crate::state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory markdown is served from.
    pub docs_root: PathBuf,
    /// YAML navigation definition (`None` uses the built-in navigation).
    pub navigation_file: Option<PathBuf>,
    /// Permanent redirects.
    pub redirects: Vec<Redirect>,
    /// Application version (part of every `ETag`).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            docs_root: PathBuf::from("content"),
            navigation_file: None,
            redirects: Vec::new(),
            version: String::new(),
        }
    }
}

/// Load the configured navigation, or the built-in one.
///
/// # Errors
///
/// Returns an error if the navigation file cannot be read or is invalid.
pub fn load_navigation(file: Option<&Path>) -> Result<Navigation, NavigationError> {
    match file {
        Some(path) => Navigation::from_file(path),
        None => Navigation::builtin(),
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the navigation fails to load or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let navigation = Arc::new(load_navigation(config.navigation_file.as_deref())?);
    let documents = DocumentRoot::new(&config.docs_root)?;

    if !documents.path().is_dir() {
        tracing::warn!(
            root = %documents.path().display(),
            "Document root is not a directory, markdown requests will fail"
        );
    }

    let redirects = RedirectTable::new(&config.redirects);
    tracing::info!(
        pages = navigation.items().count(),
        redirects = redirects.len(),
        "Loaded navigation"
    );

    let state = Arc::new(AppState {
        navigation,
        documents,
        redirects,
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

/// Create server configuration from the loaded `atomix.toml`.
///
/// # Arguments
///
/// * `config` - Loaded configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &ax_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        docs_root: config.docs_resolved.root.clone(),
        navigation_file: config.navigation_resolved.file.clone(),
        redirects: config.redirects.clone(),
        version,
    }
}
