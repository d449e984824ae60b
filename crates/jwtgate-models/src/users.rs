//! User models and DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use jwtgate_core::Role;

/// The public shape of a user, as returned by every `/users` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub role: Role,
}

/// A stored user, including the password digest.
///
/// `password_hash` is `None` for accounts created by an admin through
/// `POST /users`; such accounts cannot log in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: Role,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
        }
    }
}

/// Values for inserting a user. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: Role,
}

/// The fields `PUT /users/{id}` may change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
}

/// Body of `POST /users` and `PUT /users/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name and email are required"))]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "name and email are required"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<UserRequest> for UserChanges {
    fn from(request: UserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
        }
    }
}
