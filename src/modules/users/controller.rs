use tracing::instrument;

use jwtgate_auth::Identity;
use jwtgate_core::{ApiResult, ErrorBody, Success};
use jwtgate_models::{User, UserRequest};

use crate::modules::users::service::UserService;
use crate::pipeline::ApiRequest;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users, ordered by id", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn list_users(req: ApiRequest<Identity>) -> ApiResult {
    let users = UserService::list_users(req.state().store.as_ref()).await?;
    Success::ok(&users)
}

/// Create a user (admin only)
///
/// The account has no password and cannot log in.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Caller is not an admin", body = ErrorBody),
        (status = 409, description = "Email already in use", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn create_user(req: ApiRequest<Identity>) -> ApiResult {
    let request: UserRequest = req.valid_json()?;
    let user = UserService::create_user(req.state().store.as_ref(), request).await?;
    Success::created(&user)
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_user(req: ApiRequest<Identity>) -> ApiResult {
    let id = req.path_id()?;
    let user = UserService::get_user(req.state().store.as_ref(), id).await?;
    Success::ok(&user)
}

/// Update a user (self or admin)
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "The updated user", body = User),
        (status = 400, description = "Invalid id or request body", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Caller is neither the owner nor an admin", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 409, description = "Email already in use", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn update_user(req: ApiRequest<Identity>) -> ApiResult {
    let id = req.path_id()?;
    let request: UserRequest = req.valid_json()?;
    let user =
        UserService::update_user(req.state().store.as_ref(), req.context(), id, request).await?;
    Success::ok(&user)
}

/// Delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Caller is not an admin", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn delete_user(req: ApiRequest<Identity>) -> ApiResult {
    let id = req.path_id()?;
    UserService::delete_user(req.state().store.as_ref(), id).await?;
    Success::no_content()
}
