//! Redirect routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request
//!     → key.rs (lookup key: path+query or path)
//!     → dispatcher.rs (exact-match lookup in PathMapping)
//!         hit  → 302 Found, Location = mapped URL
//!         miss → fallback service, request passed through untouched
//!
//! Construction (at startup):
//!     PathMapping + fallback service
//!     → RedirectDispatcher (or RedirectLayer over an existing service)
//!     → frozen: mapping is never mutated afterwards
//! ```
//!
//! # Design Decisions
//! - Exact string match only, no prefixes, wildcards or regex
//! - Immutable after construction (thread-safe without locks)
//! - O(1) lookup via HashMap
//! - The dispatcher never fails; errors come only from the fallback

pub mod dispatcher;
pub mod key;

pub use dispatcher::{json_handler, map_handler, yaml_handler, RedirectDispatcher, RedirectLayer};
pub use key::{KeyPolicy, RequestTarget};
