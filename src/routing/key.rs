//! Lookup key extraction.
//!
//! # Responsibilities
//! - Expose the request target of any request type as a string
//! - Choose which part of the target is used as the mapping key
//!
//! # Design Decisions
//! - Default key is path plus query, so `/a?x=1` and `/a` are distinct
//! - Keys are compared byte-for-byte: no case folding, no percent-decoding

use axum::http::uri::PathAndQuery;
use axum::http::Request;
use serde::{Deserialize, Serialize};

/// A request whose target can be used for redirect lookup.
pub trait RequestTarget {
    /// The origin-form target as received: path plus any `?query`.
    fn target(&self) -> &str;

    /// The path component alone.
    fn path(&self) -> &str;
}

impl<B> RequestTarget for Request<B> {
    fn target(&self) -> &str {
        self.uri()
            .path_and_query()
            .map(PathAndQuery::as_str)
            .unwrap_or_else(|| self.uri().path())
    }

    fn path(&self) -> &str {
        self.uri().path()
    }
}

/// Which part of the request target is looked up in the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    /// Path and query string (`/a?x=1`).
    #[default]
    PathAndQuery,
    /// Path only; the query string is ignored (`/a`).
    Path,
}

impl KeyPolicy {
    /// Extract the lookup key for a request.
    pub fn key<'r, R: RequestTarget + ?Sized>(&self, request: &'r R) -> &'r str {
        match self {
            KeyPolicy::PathAndQuery => request.target(),
            KeyPolicy::Path => request.path(),
        }
    }
}
