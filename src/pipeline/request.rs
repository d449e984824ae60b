use axum::{
    body::Bytes,
    http::{HeaderMap, Method, Uri, request::Parts},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use jwtgate_core::AppError;

use crate::state::AppState;

const INVALID_BODY: &str = "Invalid request body";

/// A buffered request plus the context gathered by the gates it has passed.
///
/// `C` is `()` until [`Authenticate`](crate::middleware::Authenticate) runs and
/// [`Identity`](jwtgate_auth::Identity) afterwards.
#[derive(Debug)]
pub struct ApiRequest<C = ()> {
    parts: Parts,
    body: Bytes,
    params: Vec<(String, String)>,
    state: AppState,
    context: C,
}

impl ApiRequest<()> {
    pub fn new(parts: Parts, body: Bytes, params: Vec<(String, String)>, state: AppState) -> Self {
        Self {
            parts,
            body,
            params,
            state,
            context: (),
        }
    }
}

impl<C> ApiRequest<C> {
    pub fn method(&self) -> &Method {
        &self.parts.method
    }

    pub fn uri(&self) -> &Uri {
        &self.parts.uri
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// A matched path parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The `{id}` path parameter as an integer.
    pub fn path_id(&self) -> Result<i64, AppError> {
        self.param("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .ok_or_else(|| {
                AppError::bad_request("Path parameter 'id' must be an integer")
                    .with_message("Not a valid id")
            })
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_slice(&self.body).map_err(|e| {
            tracing::debug!(error = %e, "rejected request body");
            AppError::bad_request("Not a valid JSON").with_message(INVALID_BODY)
        })
    }

    /// Decodes the body as JSON and runs its `validator` rules.
    pub fn valid_json<T: DeserializeOwned + Validate>(&self) -> Result<T, AppError> {
        let value: T = self.json()?;
        value.validate().map_err(|errors| {
            AppError::bad_request(format_errors(&errors)).with_message(INVALID_BODY)
        })?;
        Ok(value)
    }

    /// Replaces the context, keeping everything else.
    pub fn with_context<D>(self, context: D) -> ApiRequest<D> {
        ApiRequest {
            parts: self.parts,
            body: self.body,
            params: self.params,
            state: self.state,
            context,
        }
    }
}

/// Joins the distinct rule messages, so fields sharing one message report it
/// once.
fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages.join(", ")
}
