use tracing::instrument;

use jwtgate_core::{ApiResult, ErrorBody, Success};
use jwtgate_models::{AuthResponse, LoginRequest, RegisterRequest};

use super::service::AuthService;
use crate::pipeline::ApiRequest;

/// Register a new account
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 409, description = "Email already in use", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register(req: ApiRequest) -> ApiResult {
    let request: RegisterRequest = req.valid_json()?;
    let response = AuthService::register(req.state(), request).await?;
    Success::created(&response)
}

/// Log in and receive a token
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 401, description = "Invalid email or password", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login(req: ApiRequest) -> ApiResult {
    let request: LoginRequest = req.valid_json()?;
    let response = AuthService::login(req.state(), request).await?;
    Success::ok(&response)
}
