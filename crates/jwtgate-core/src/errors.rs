//! Application error taxonomy.
//!
//! Every failure a handler or middleware can produce is an [`AppError`]. The
//! [`ErrorKind`] fixes the HTTP status and the stable machine-readable code;
//! `message` and `detail` are the human-facing parts of the [`ErrorBody`]
//! written to the client.
//!
//! | Kind | Status | Code |
//! |------|--------|------|
//! | `BadRequest` | 400 | `E400` |
//! | `Unauthorized` | 401 | `E401` |
//! | `Forbidden` | 403 | `E403` |
//! | `NotFound` | 404 | `E404` |
//! | `Conflict` | 409 | `E409` |
//! | `Internal` | 500 | `E500` |

use std::fmt::Display;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Detail sent to clients for every internal failure. The real cause only goes
/// to the logs.
pub const INTERNAL_DETAIL: &str = "Something went wrong. Contact support or try again later";

/// Failure categories understood by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub const fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::BadRequest => "E400",
            Self::Unauthorized => "E401",
            Self::Forbidden => "E403",
            Self::NotFound => "E404",
            Self::Conflict => "E409",
            Self::Internal => "E500",
        }
    }

    pub const fn default_message(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not found",
            Self::Conflict => "Conflict",
            Self::Internal => "Internal Server Error",
        }
    }
}

/// The error record written as the body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Stable machine-readable code, e.g. `E401`
    pub code: String,
    /// Short human-readable summary
    pub message: String,
    /// Operator-facing context; never a stack trace
    pub detail: String,
}

/// The failure variant of the result envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code} {message}: {detail}", code = .kind.code())]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    detail: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, detail)
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, detail)
    }

    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, detail)
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, detail)
    }

    /// Builds an internal error. The cause is logged here and never reaches
    /// the client.
    pub fn internal<E: Display>(err: E) -> Self {
        tracing::error!(error = %err, "internal error");
        Self::new(ErrorKind::Internal, INTERNAL_DETAIL)
    }

    /// Replaces the default summary for this kind.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().to_string(),
            message: self.message.clone(),
            detail: self.detail.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
