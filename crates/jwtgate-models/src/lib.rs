//! # jwtgate Models
//!
//! Domain models and DTOs for the jwtgate API.
//!
//! - [`auth`]: register/login requests and the token response
//! - [`users`]: the user entity, its public shape and the create/update DTOs
//!
//! Request DTOs default every missing field to an empty string and rely on
//! `validator` rules to reject it, so a missing field and an empty one produce
//! the same client-facing message.

pub mod auth;
pub mod users;

pub use auth::{AuthResponse, HealthResponse, LoginRequest, RegisterRequest};
pub use users::{NewUser, User, UserChanges, UserRecord, UserRequest};
