use jwtgate_core::{ApiResult, Success};
use jwtgate_models::HealthResponse;

use crate::pipeline::ApiRequest;

/// Health check
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Server is up", body = HealthResponse)),
    tag = "Health"
)]
pub async fn health(_req: ApiRequest) -> ApiResult {
    Success::ok(&HealthResponse::alive())
}
