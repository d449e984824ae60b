use axum::http::{HeaderMap, header};
use tracing::debug;

use jwtgate_auth::{Identity, JwtCodec};
use jwtgate_core::AppError;

use crate::pipeline::{ApiRequest, Middleware};

/// Gate that admits requests carrying a valid bearer token.
///
/// The three failure details are `Missing token`, `Invalid token format` and
/// `Invalid token`. Why a token failed verification is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Authenticate;

impl Middleware<()> for Authenticate {
    type Out = Identity;

    async fn process(&self, req: ApiRequest<()>) -> Result<ApiRequest<Identity>, AppError> {
        let identity = authenticate(&req.state().jwt, req.headers())?;
        Ok(req.with_context(identity))
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str())
        .unwrap_or(Ok(""))
        .map_err(|_| AppError::unauthorized("Invalid token format"))?;

    if value.is_empty() {
        return Err(AppError::unauthorized("Missing token"));
    }

    match value.split(' ').collect::<Vec<_>>().as_slice() {
        ["Bearer", token] => Ok(*token),
        _ => Err(AppError::unauthorized("Invalid token format")),
    }
}

/// Verifies the bearer token in `headers` and returns the caller.
pub fn authenticate(codec: &JwtCodec, headers: &HeaderMap) -> Result<Identity, AppError> {
    let token = bearer_token(headers)?;

    codec.identify(token).map_err(|e| {
        debug!(error = %e, "token verification failed");
        AppError::unauthorized("Invalid token")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header() {
        let err = bearer_token(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.detail(), "Missing token");
    }

    #[test]
    fn test_empty_header_counts_as_missing() {
        let err = bearer_token(&headers("")).unwrap_err();
        assert_eq!(err.detail(), "Missing token");
    }

    #[test]
    fn test_wrong_scheme() {
        let err = bearer_token(&headers("Basic abc")).unwrap_err();
        assert_eq!(err.detail(), "Invalid token format");
    }

    #[test]
    fn test_too_many_parts() {
        let err = bearer_token(&headers("Bearer a b")).unwrap_err();
        assert_eq!(err.detail(), "Invalid token format");
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        let err = bearer_token(&headers("bearer abc")).unwrap_err();
        assert_eq!(err.detail(), "Invalid token format");
    }

    #[test]
    fn test_bearer_token_extracted() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }
}
