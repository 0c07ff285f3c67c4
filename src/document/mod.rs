//! Redirect document subsystem.
//!
//! # Data Flow
//! ```text
//! document bytes (YAML or JSON)
//!     → parser.rs (deserialize into ordered RedirectEntry records)
//!     → entry.rs (fold records into PathMapping, last duplicate wins)
//!     → PathMapping (immutable, handed to the dispatcher)
//!
//! From disk (host binary only):
//!     source.rs reads the file
//!     → format chosen by extension
//!     → parser.rs
//! ```
//!
//! # Design Decisions
//! - Parsing is all-or-nothing: a malformed document never yields a partial mapping
//! - URLs and paths are stored verbatim, no normalization or validation
//! - Document order is the tie-break for duplicate paths

pub mod entry;
pub mod parser;
pub mod source;

pub use entry::{PathMapping, RedirectEntry};
pub use parser::{parse, parse_as, parse_json, DocumentFormat, ParseError};
pub use source::{load_document, DocumentError};
