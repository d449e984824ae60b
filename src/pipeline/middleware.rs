//! Middleware gates and their composition.
//!
//! A [`Middleware`] sees the request on its way in and nothing else. It
//! returns either the request, possibly carrying a new context, or an
//! [`AppError`] that ends the chain. Since a gate never receives the
//! downstream envelope it has no way to alter or drop it: whatever the
//! handler returns is what reaches the client.
//!
//! Gates are declared on a route with [`Chain`], outermost first:
//!
//! ```
//! use jwtgate::middleware::{Authenticate, RequireRole};
//! use jwtgate::pipeline::{ApiRequest, Chain, adapt};
//! use jwtgate_auth::Identity;
//! use jwtgate_core::{ApiResult, Success};
//!
//! async fn purge(_req: ApiRequest<Identity>) -> ApiResult {
//!     Success::no_content()
//! }
//!
//! let route = adapt(
//!     Chain::new()
//!         .then(Authenticate)
//!         .then(RequireRole::admin())
//!         .handle(purge),
//! );
//! # let _ = route;
//! ```
//!
//! The context each gate expects is checked when the chain is declared, so a
//! role check placed before authentication is rejected by the compiler:
//!
//! ```compile_fail
//! use jwtgate::middleware::{Authenticate, RequireRole};
//! use jwtgate::pipeline::{ApiRequest, Chain};
//! use jwtgate_auth::Identity;
//! use jwtgate_core::{ApiResult, Success};
//!
//! async fn purge(_req: ApiRequest<Identity>) -> ApiResult {
//!     Success::no_content()
//! }
//!
//! let route = Chain::new()
//!     .then(RequireRole::admin())
//!     .then(Authenticate)
//!     .handle(purge);
//! ```

use std::future::Future;
use std::marker::PhantomData;

use jwtgate_core::{ApiResult, AppError};

use crate::pipeline::handler::ApiHandler;
use crate::pipeline::request::ApiRequest;

/// A gate in front of a handler.
///
/// `In` is the context the gate requires and [`Middleware::Out`] the context
/// it hands on.
pub trait Middleware<In>: Clone + Send + Sync + 'static {
    type Out;

    fn process(
        &self,
        req: ApiRequest<In>,
    ) -> impl Future<Output = Result<ApiRequest<Self::Out>, AppError>> + Send;

    /// Puts this gate in front of `next`.
    fn wrap<H>(self, next: H) -> Layered<Self, H>
    where
        H: ApiHandler<Self::Out>,
    {
        Layered { gate: self, next }
    }
}

/// A gate and the handler behind it.
#[derive(Debug, Clone)]
pub struct Layered<M, H> {
    gate: M,
    next: H,
}

impl<In, M, H> ApiHandler<In> for Layered<M, H>
where
    In: Send + 'static,
    M: Middleware<In>,
    M::Out: Send + 'static,
    H: ApiHandler<M::Out>,
{
    async fn call(&self, req: ApiRequest<In>) -> ApiResult {
        let req = self.gate.process(req).await?;
        self.next.call(req).await
    }
}

/// Two gates run back to back, `outer` first.
#[derive(Debug, Clone)]
pub struct Stack<A, B> {
    outer: A,
    inner: B,
}

impl<In, A, B> Middleware<In> for Stack<A, B>
where
    In: Send + 'static,
    A: Middleware<In>,
    A::Out: Send + 'static,
    B: Middleware<A::Out>,
{
    type Out = B::Out;

    async fn process(&self, req: ApiRequest<In>) -> Result<ApiRequest<B::Out>, AppError> {
        let req = self.outer.process(req).await?;
        self.inner.process(req).await
    }
}

/// The empty gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl<In: Send + 'static> Middleware<In> for PassThrough {
    type Out = In;

    async fn process(&self, req: ApiRequest<In>) -> Result<ApiRequest<In>, AppError> {
        Ok(req)
    }
}

/// Route-level builder for a gate sequence.
///
/// The first gate passed to [`Chain::then`] runs first.
pub struct Chain<In = (), M = PassThrough> {
    stages: M,
    _in: PhantomData<fn(In)>,
}

impl Chain<(), PassThrough> {
    /// An empty chain over an unauthenticated request.
    pub fn new() -> Self {
        Self {
            stages: PassThrough,
            _in: PhantomData,
        }
    }
}

impl Default for Chain<(), PassThrough> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In, M> Chain<In, M>
where
    In: Send + 'static,
    M: Middleware<In>,
    M::Out: Send + 'static,
{
    /// Appends a gate that runs after every gate declared so far.
    pub fn then<N>(self, gate: N) -> Chain<In, Stack<M, N>>
    where
        N: Middleware<M::Out>,
    {
        Chain {
            stages: Stack {
                outer: self.stages,
                inner: gate,
            },
            _in: PhantomData,
        }
    }

    /// Terminates the chain with `handler`.
    pub fn handle<H>(self, handler: H) -> Layered<M, H>
    where
        H: ApiHandler<M::Out>,
    {
        self.stages.wrap(handler)
    }
}
