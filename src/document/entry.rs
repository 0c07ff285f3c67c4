//! Redirect records and the path mapping they fold into.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single `{path, url}` record from a redirect document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedirectEntry {
    /// Request target to match (exact string).
    pub path: String,

    /// Destination URL, stored verbatim.
    pub url: String,
}

impl RedirectEntry {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Exact-match table from request target to destination URL.
///
/// Built once, then shared read-only by the dispatcher. Inserting a path
/// that already exists replaces its URL, so folding entries in document
/// order gives last-wins semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMapping {
    paths: HashMap<String, String>,
}

impl PathMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the destination for an exact request target.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.paths.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over `(path, url)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    /// Fold another mapping in; its URLs win on shared paths.
    pub fn merge(&mut self, other: PathMapping) {
        self.paths.extend(other.paths);
    }

    /// Fold an entry in, replacing any earlier URL for the same path.
    pub(crate) fn insert(&mut self, entry: RedirectEntry) {
        self.paths.insert(entry.path, entry.url);
    }
}

impl From<HashMap<String, String>> for PathMapping {
    fn from(paths: HashMap<String, String>) -> Self {
        Self { paths }
    }
}

impl FromIterator<RedirectEntry> for PathMapping {
    fn from_iter<I: IntoIterator<Item = RedirectEntry>>(iter: I) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}

impl Extend<RedirectEntry> for PathMapping {
    fn extend<I: IntoIterator<Item = RedirectEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}
