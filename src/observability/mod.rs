//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → request spans (method, uri, request_id) from the HTTP layer
//!
//! logging.rs routes them:
//!     → EnvFilter (RUST_LOG or configured level)
//!     → fmt layer (pretty or JSON) on stdout
//! ```

pub mod logging;

pub use logging::init_logging;
