//! Authentication and authorization gates.
//!
//! # Modules
//!
//! - [`auth`]: [`Authenticate`], which verifies the bearer token and attaches
//!   the caller's [`Identity`](jwtgate_auth::Identity)
//! - [`role`]: [`RequireRole`], which admits only callers with a given role
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `Authenticate` verifies the token and turns `ApiRequest<()>` into
//!    `ApiRequest<Identity>`
//! 3. `RequireRole` (admin-only routes) checks the identity's role
//! 4. Handler executes if all checks pass
//!
//! Ownership checks that depend on the target record ("only the owner or an
//! admin may edit this user") are not gates. They live in the service that
//! loads the record.

pub mod auth;
pub mod role;

pub use auth::{Authenticate, authenticate, bearer_token};
pub use role::{RequireRole, require_role};
