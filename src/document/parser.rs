//! Redirect document parsing.
//!
//! # Responsibilities
//! - Deserialize a sequence of `{path, url}` records
//! - Fold records into a `PathMapping` in document order
//!
//! # Design Decisions
//! - YAML is the primary format; JSON accepted as an alternative
//! - Structural errors only: URLs and paths are not inspected
//! - Extra fields on a record are ignored

use std::path::Path;

use thiserror::Error;

use crate::document::entry::{PathMapping, RedirectEntry};

/// The document was not a well-formed sequence of redirect records.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid YAML redirect document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON redirect document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialization format of a redirect document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Infer the format from a file extension: `.json` is JSON, anything else YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Parse a YAML redirect document.
///
/// ```yaml
/// - path: /some-path
///   url: https://www.some-url.com/demo
/// ```
pub fn parse(document: &[u8]) -> Result<PathMapping, ParseError> {
    // An empty YAML stream holds no records.
    if document.iter().all(u8::is_ascii_whitespace) {
        return Ok(PathMapping::new());
    }
    let entries: Vec<RedirectEntry> = serde_yaml::from_slice(document)?;
    Ok(entries.into_iter().collect())
}

/// Parse a JSON array of `{"path": ..., "url": ...}` objects.
pub fn parse_json(document: &[u8]) -> Result<PathMapping, ParseError> {
    let entries: Vec<RedirectEntry> = serde_json::from_slice(document)?;
    Ok(entries.into_iter().collect())
}

/// Parse a document in the given format.
pub fn parse_as(format: DocumentFormat, document: &[u8]) -> Result<PathMapping, ParseError> {
    match format {
        DocumentFormat::Yaml => parse(document),
        DocumentFormat::Json => parse_json(document),
    }
}
