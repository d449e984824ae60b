//! The typed request pipeline.
//!
//! Routes are built from three pieces:
//!
//! - an [`ApiHandler`], a function from [`ApiRequest<C>`] to an
//!   [`ApiResult`](jwtgate_core::ApiResult)
//! - zero or more [`Middleware`] gates composed with a [`Chain`], each of which
//!   either passes the request on (possibly with a richer context) or
//!   short-circuits with an error
//! - [`adapt`], which turns the result into an axum handler and renders the
//!   envelope
//!
//! ```text
//! axum ──▶ adapt ──▶ gate 1 ──▶ gate 2 ──▶ handler
//!   ◀── render ◀──────────── envelope ◀────┘
//! ```
//!
//! A gate only ever returns a request or an error. The envelope on the way back
//! out is always the one the handler produced, unless a gate stopped the chain
//! before the handler ran.

pub mod handler;
pub mod middleware;
pub mod request;

pub use handler::{Adapted, ApiHandler, adapt};
pub use middleware::{Chain, Layered, Middleware, PassThrough, Stack};
pub use request::ApiRequest;
