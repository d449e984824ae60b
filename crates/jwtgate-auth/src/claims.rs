//! JWT claims and the identity they carry.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use jwtgate_core::Role;

/// Payload of an access token.
///
/// # Fields
///
/// - `sub`: user id, as a string per RFC 7519
/// - `username`: display name of the account
/// - `role`: account role at issue time
/// - `exp`: expiration (Unix timestamp)
/// - `iat`: issued-at (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub role: Role,
    pub exp: usize,
    pub iat: usize,
}

/// The authenticated caller, attached to a request once its token verifies.
///
/// Lives for one request. Nothing about it is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
