//! Loading redirect documents from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::entry::PathMapping;
use crate::document::parser::{parse_as, DocumentFormat, ParseError};

/// Error type for document loading.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read redirect document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Read a redirect document and parse it using the format implied by its extension.
pub fn load_document(path: &Path) -> Result<PathMapping, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = DocumentFormat::from_path(path);
    let mapping = parse_as(format, &bytes)?;

    tracing::info!(
        path = %path.display(),
        format = ?format,
        redirects = mapping.len(),
        "Redirect document loaded"
    );
    Ok(mapping)
}
