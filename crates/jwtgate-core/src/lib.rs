//! # jwtgate Core
//!
//! Core types shared by every other jwtgate crate.
//!
//! - [`errors`]: the error taxonomy and its wire record
//! - [`envelope`]: the success half of the result envelope and the renderer
//! - [`password`]: one-way password hashing
//! - [`roles`]: the closed set of account roles
//!
//! Every handler returns an [`ApiResult`]. `Ok` carries a [`Success`] and `Err`
//! carries an [`AppError`]; [`render`] is the only place either one becomes an
//! HTTP response.
//!
//! # Example
//!
//! ```
//! use jwtgate_core::{AppError, ApiResult, Success};
//!
//! fn lookup(found: bool) -> ApiResult {
//!     if !found {
//!         return Err(AppError::not_found("User with id 7 not found"));
//!     }
//!     Success::ok(&serde_json::json!({ "id": 7 }))
//! }
//!
//! assert!(lookup(true).is_ok());
//! assert_eq!(lookup(false).unwrap_err().code(), "E404");
//! ```

pub mod envelope;
pub mod errors;
pub mod password;
pub mod roles;

pub use envelope::{ApiResult, Success, render};
pub use errors::{AppError, ErrorBody, ErrorKind};
pub use password::{BcryptHasher, PasswordHasher};
pub use roles::Role;
