//! Redirect response construction.
//!
//! # Responsibilities
//! - Build `302 Found` responses carrying a `Location` header
//! - Keep the destination verbatim whenever it is a legal header value
//!
//! # Design Decisions
//! - Body type is generic (`Default`) so any framework's response fits
//! - Control characters in a destination are percent-encoded, never rejected
//! - No body and no `Content-Type`: clients follow `Location`, and an HTML
//!   stub would tie the body type to one framework

use axum::http::{header, HeaderValue, Response, StatusCode};

/// A `302 Found` response pointing at `location`, with an empty body.
pub fn found<B: Default>(location: &str) -> Response<B> {
    let mut response = Response::new(B::default());
    *response.status_mut() = StatusCode::FOUND;
    response
        .headers_mut()
        .insert(header::LOCATION, location_header(location));
    response
}

fn location_header(location: &str) -> HeaderValue {
    if let Ok(value) = HeaderValue::from_str(location) {
        return value;
    }

    let mut escaped = Vec::with_capacity(location.len() + 8);
    for b in location.bytes() {
        if b.is_ascii_control() {
            escaped.extend_from_slice(format!("%{:02X}", b).as_bytes());
        } else {
            escaped.push(b);
        }
    }
    // Control bytes are the only thing header values reject.
    HeaderValue::from_bytes(&escaped).unwrap_or_else(|_| HeaderValue::from_static("/"))
}
