//! Typed handlers and the adapter that mounts them on axum.

use std::future::Future;
use std::pin::Pin;

use axum::{
    body::{self, Bytes},
    extract::{FromRequestParts, RawPathParams, Request},
    handler::Handler,
    response::Response,
};

use jwtgate_core::{ApiResult, AppError, render};

use crate::pipeline::request::ApiRequest;
use crate::state::AppState;

/// Largest request body the adapter will buffer.
pub const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// A typed request handler.
///
/// Implemented for every `async fn(ApiRequest<C>) -> ApiResult` and for the
/// handlers a [`Chain`](crate::pipeline::Chain) produces.
pub trait ApiHandler<C>: Clone + Send + Sync + 'static {
    fn call(&self, req: ApiRequest<C>) -> impl Future<Output = ApiResult> + Send;
}

impl<C, F, Fut> ApiHandler<C> for F
where
    F: Fn(ApiRequest<C>) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = ApiResult> + Send,
{
    fn call(&self, req: ApiRequest<C>) -> impl Future<Output = ApiResult> + Send {
        self(req)
    }
}

/// Mounts a typed handler on an axum route.
///
/// ```ignore
/// Router::new().route("/", get(adapt(health)))
/// ```
pub fn adapt<H: ApiHandler<()>>(handler: H) -> Adapted<H> {
    Adapted(handler)
}

/// An [`ApiHandler`] wrapped for axum. Built by [`adapt`].
#[derive(Clone)]
pub struct Adapted<H>(H);

#[doc(hidden)]
pub struct AdaptedMarker;

impl<H> Handler<AdaptedMarker, AppState> for Adapted<H>
where
    H: ApiHandler<()>,
{
    type Future = Pin<Box<dyn Future<Output = Response> + Send>>;

    fn call(self, req: Request, state: AppState) -> Self::Future {
        Box::pin(async move {
            let (mut parts, body) = req.into_parts();

            let params = match RawPathParams::from_request_parts(&mut parts, &state).await {
                Ok(raw) => raw
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
                Err(_) => Vec::new(),
            };

            let body: Bytes = match body::to_bytes(body, BODY_LIMIT).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::debug!(error = %e, "failed to buffer request body");
                    return render(Err(AppError::bad_request("Could not read request body")));
                }
            };

            let request = ApiRequest::new(parts, body, params, state);
            render(self.0.call(request).await)
        })
    }
}
