//! Startup orchestration.
//!
//! # Responsibilities
//! - Assemble the path mapping from inline entries and the redirect document
//! - Build the HTTP server from validated configuration
//!
//! # Design Decisions
//! - Fail fast: a missing or malformed document is fatal
//! - Every failed stage is logged before it is returned
//! - Document entries override inline entries on duplicate paths

use std::fmt::Display;

use tokio::net::TcpListener;

use crate::config::{RedirectsConfig, UrlshortConfig};
use crate::document::{load_document, DocumentError, PathMapping};
use crate::http::HttpServer;

/// Build the path mapping described by the redirects configuration.
pub fn load_redirects(config: &RedirectsConfig) -> Result<PathMapping, DocumentError> {
    let mut mapping: PathMapping = config.entries.iter().cloned().collect();

    if let Some(path) = &config.document {
        mapping.merge(load_document(path)?);
    }

    if mapping.is_empty() {
        tracing::warn!("No redirects configured; every request will use the fallback");
    }
    Ok(mapping)
}

/// Load redirects and construct the server.
pub fn build_server(config: UrlshortConfig) -> Result<HttpServer, DocumentError> {
    let mapping = load_redirects(&config.redirects)?;
    tracing::info!(redirects = mapping.len(), "Redirects ready");
    Ok(HttpServer::new(config, mapping))
}

/// Log a failed startup stage, then hand the result back unchanged.
pub fn report_failure<T, E: Display>(stage: &'static str, result: Result<T, E>) -> Result<T, E> {
    if let Err(e) = &result {
        tracing::error!(stage, error = %format!("{e:#}"), "Startup failed");
    }
    result
}

/// Bind the listener, logging the address on failure.
pub async fn bind_listener(address: &str) -> Result<TcpListener, std::io::Error> {
    let result = TcpListener::bind(address).await;
    if let Err(e) = &result {
        tracing::error!(address, error = %e, "Failed to bind listener");
    }
    result
}
