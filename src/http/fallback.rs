//! Default fallback handler for unmapped paths.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::config::FallbackConfig;

/// Fixed response served when no redirect matches.
#[derive(Debug, Clone)]
pub struct FallbackResponse {
    status: StatusCode,
    body: String,
}

impl FallbackResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Build from config. Validation only admits final statuses (200-599);
    /// anything else that slips through is served as 200.
    pub fn from_config(config: &FallbackConfig) -> Self {
        let status = StatusCode::from_u16(config.status)
            .ok()
            .filter(|s| !s.is_informational())
            .unwrap_or(StatusCode::OK);
        Self::new(status, config.body.clone())
    }
}

/// Axum handler answering with the configured fallback response.
pub async fn respond(State(fallback): State<Arc<FallbackResponse>>) -> Response {
    (fallback.status, fallback.body.clone()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_says_hello() {
        let fallback = FallbackResponse::from_config(&FallbackConfig::default());
        assert_eq!(fallback.status, StatusCode::OK);
        assert_eq!(fallback.body, "Hello, world!");
    }

    #[test]
    fn test_informational_status_never_served() {
        let config = FallbackConfig {
            status: 103,
            body: "x".into(),
        };
        let fallback = FallbackResponse::from_config(&config);
        assert_eq!(fallback.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_respond() {
        let fallback = Arc::new(FallbackResponse::new(StatusCode::NOT_FOUND, "nope"));
        let res = respond(State(fallback)).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"nope");
    }
}
