//! Redirect dispatch.
//!
//! # Responsibilities
//! - Look up each request's key in the path mapping
//! - Answer hits with `302 Found` and a `Location` header
//! - Hand misses, untouched, to the fallback service
//!
//! # Design Decisions
//! - Mapping is shared via `Arc` and never mutated (no locks on the hot path)
//! - The fallback is any `tower::Service` with a matching response type
//! - Redirects resolve immediately; only the fallback path awaits anything

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::{Request, Response};
use futures_util::future::{self, Either, Ready};
use tower::{Layer, Service};

use crate::document::{parse, parse_json, ParseError, PathMapping};
use crate::http::response::found;
use crate::routing::key::KeyPolicy;

/// Service that redirects mapped request targets and delegates everything else.
#[derive(Debug, Clone)]
pub struct RedirectDispatcher<F> {
    mapping: Arc<PathMapping>,
    fallback: F,
    key_policy: KeyPolicy,
}

impl<F> RedirectDispatcher<F> {
    /// Build a dispatcher over `mapping`, delegating misses to `fallback`.
    pub fn new(mapping: impl Into<Arc<PathMapping>>, fallback: F) -> Self {
        Self {
            mapping: mapping.into(),
            fallback,
            key_policy: KeyPolicy::default(),
        }
    }

    /// Change which part of the request target is used as the lookup key.
    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }

    pub fn mapping(&self) -> &PathMapping {
        &self.mapping
    }

    pub fn key_policy(&self) -> KeyPolicy {
        self.key_policy
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<F, ReqBody, ResBody> Service<Request<ReqBody>> for RedirectDispatcher<F>
where
    F: Service<Request<ReqBody>, Response = Response<ResBody>>,
    ResBody: Default,
{
    type Response = Response<ResBody>;
    type Error = F::Error;
    type Future = Either<Ready<Result<Response<ResBody>, F::Error>>, F::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.fallback.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let key = self.key_policy.key(&request);
        if let Some(url) = self.mapping.get(key) {
            tracing::debug!(key = %key, location = %url, "Redirecting");
            return Either::Left(future::ok(found(url)));
        }

        tracing::trace!(key = %key, "No redirect, delegating to fallback");
        Either::Right(self.fallback.call(request))
    }
}

/// Layer that wraps an inner service as the fallback of a [`RedirectDispatcher`].
#[derive(Debug, Clone)]
pub struct RedirectLayer {
    mapping: Arc<PathMapping>,
    key_policy: KeyPolicy,
}

impl RedirectLayer {
    pub fn new(mapping: impl Into<Arc<PathMapping>>) -> Self {
        Self {
            mapping: mapping.into(),
            key_policy: KeyPolicy::default(),
        }
    }

    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }
}

impl<S> Layer<S> for RedirectLayer {
    type Service = RedirectDispatcher<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RedirectDispatcher {
            mapping: self.mapping.clone(),
            fallback: inner,
            key_policy: self.key_policy,
        }
    }
}

/// Dispatcher over an in-memory mapping.
pub fn map_handler<F>(mapping: impl Into<PathMapping>, fallback: F) -> RedirectDispatcher<F> {
    let mapping: PathMapping = mapping.into();
    RedirectDispatcher::new(mapping, fallback)
}

/// Parse a YAML redirect document and build a dispatcher from it.
///
/// The only possible error is a malformed document.
pub fn yaml_handler<F>(document: &[u8], fallback: F) -> Result<RedirectDispatcher<F>, ParseError> {
    let mapping = parse(document)?;
    Ok(RedirectDispatcher::new(mapping, fallback))
}

/// Parse a JSON redirect document and build a dispatcher from it.
pub fn json_handler<F>(document: &[u8], fallback: F) -> Result<RedirectDispatcher<F>, ParseError> {
    let mapping = parse_json(document)?;
    Ok(RedirectDispatcher::new(mapping, fallback))
}
