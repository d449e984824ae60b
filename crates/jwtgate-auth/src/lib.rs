//! # jwtgate Auth
//!
//! Token claims and the JWT codec.
//!
//! - [`claims`]: the signed payload ([`Claims`]) and the request-scoped
//!   [`Identity`] derived from it
//! - [`jwt`]: [`JwtCodec`], which signs and verifies HMAC tokens
//!
//! Tokens are never stored server-side. Expiry is the only way a session ends.
//!
//! # Example
//!
//! ```
//! use jwtgate_auth::JwtCodec;
//! use jwtgate_config::JwtConfig;
//! use jwtgate_core::Role;
//!
//! let codec = JwtCodec::new(&JwtConfig::new("an-example-secret"));
//! let token = codec.issue(42, "Ada", Role::User).unwrap();
//! let identity = codec.identify(&token).unwrap();
//!
//! assert_eq!(identity.user_id, 42);
//! assert_eq!(identity.role, Role::User);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{Claims, Identity};
pub use jwt::{JwtCodec, TokenError};
