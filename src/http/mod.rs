//! HTTP hosting subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign / propagate x-request-id)
//!     → routing::RedirectDispatcher (fallback service of the router)
//!         hit  → response.rs (302 Found + Location)
//!         miss → fallback.rs (configured default response)
//!     → Send to client
//! ```

pub mod fallback;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::found;
pub use server::HttpServer;
