//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the redirect dispatcher as its fallback service
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve on a bound listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, handler::Handler, http::Request, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::UrlshortConfig;
use crate::document::PathMapping;
use crate::http::fallback::{self, FallbackResponse};
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::lifecycle::ShutdownSignal;
use crate::routing::RedirectDispatcher;

/// HTTP server hosting the redirect dispatcher.
pub struct HttpServer {
    router: Router,
    config: UrlshortConfig,
    redirects: usize,
}

impl HttpServer {
    /// Create a new HTTP server serving `mapping` with the given configuration.
    pub fn new(config: UrlshortConfig, mapping: PathMapping) -> Self {
        let redirects = mapping.len();
        let router = Self::build_router(&config, mapping);
        Self {
            router,
            config,
            redirects,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &UrlshortConfig, mapping: PathMapping) -> Router {
        let fallback = fallback::respond
            .with_state(Arc::new(FallbackResponse::from_config(&config.fallback)));
        let dispatcher = RedirectDispatcher::new(mapping, fallback)
            .with_key_policy(config.redirects.key_policy);

        Router::new().fallback_service(dispatcher).layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(
                    TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %req.method(),
                            uri = %req.uri(),
                            request_id = %request_id(req),
                        )
                    }),
                )
                .layer(propagate_request_id_layer())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                ))),
        )
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` resolves, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            redirects = self.redirects,
            key_policy = ?self.config.redirects.key_policy,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
                tracing::info!("Shutdown triggered, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &UrlshortConfig {
        &self.config
    }
}
