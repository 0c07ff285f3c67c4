//! Path-to-URL redirect service.
//!
//! Parse a redirect document into a [`PathMapping`], then wrap any fallback
//! `tower::Service` in a [`RedirectDispatcher`]: mapped request targets get a
//! `302 Found`, everything else goes to the fallback untouched.
//!
//! ```no_run
//! use axum::{handler::HandlerWithoutStateExt, Router};
//! use urlshort::routing::yaml_handler;
//!
//! async fn hello() -> &'static str {
//!     "Hello, world!"
//! }
//!
//! # fn main() -> Result<(), urlshort::document::ParseError> {
//! let yaml = b"- path: /urlshort\n  url: https://github.com/gophercises/urlshort\n";
//! let app: Router = Router::new().fallback_service(yaml_handler(yaml, hello.into_service())?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::UrlshortConfig;
pub use document::{parse, ParseError, PathMapping, RedirectEntry};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{map_handler, yaml_handler, RedirectDispatcher, RedirectLayer};
