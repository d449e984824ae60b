//! The result envelope and its renderer.
//!
//! A handler outcome is an [`ApiResult`]: `Ok(Success)` or `Err(AppError)`.
//! The payload of a [`Success`] is encoded to JSON when the value is built, so
//! an encoding failure surfaces as an internal error inside the handler rather
//! than halfway through writing a response.

use axum::{
    body::{Body, Bytes},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::errors::AppError;

/// Outcome of every typed handler and middleware chain.
pub type ApiResult = Result<Success, AppError>;

/// The success variant of the envelope: a status and an optional JSON payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success {
    status: StatusCode,
    data: Option<Bytes>,
}

impl Success {
    /// Encodes `data` and pairs it with `status`.
    pub fn new<T: Serialize + ?Sized>(status: StatusCode, data: &T) -> ApiResult {
        let encoded = serde_json::to_vec(data).map_err(AppError::internal)?;
        Ok(Self {
            status,
            data: Some(Bytes::from(encoded)),
        })
    }

    pub fn ok<T: Serialize + ?Sized>(data: &T) -> ApiResult {
        Self::new(StatusCode::OK, data)
    }

    pub fn created<T: Serialize + ?Sized>(data: &T) -> ApiResult {
        Self::new(StatusCode::CREATED, data)
    }

    /// A bodiless success, e.g. `204 No Content` after a delete.
    pub fn empty(status: StatusCode) -> ApiResult {
        Ok(Self { status, data: None })
    }

    pub fn no_content() -> ApiResult {
        Self::empty(StatusCode::NO_CONTENT)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The encoded JSON payload, if any.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }
}

impl IntoResponse for Success {
    fn into_response(self) -> Response {
        let body = self.data.map(Body::from).unwrap_or_else(Body::empty);
        (self.status, body).into_response()
    }
}

/// Writes an envelope to the wire.
///
/// `Content-Type: application/json` is set on every response, including
/// bodiless ones.
pub fn render(result: ApiResult) -> Response {
    let mut response = match result {
        Ok(success) => success.into_response(),
        Err(err) => err.into_response(),
    };
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
