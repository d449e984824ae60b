//! JWT signing and verification.
//!
//! [`JwtCodec`] holds the keys derived from the configured secret and the
//! validation rules applied to every incoming token:
//!
//! - only the HMAC family (`HS256`, `HS384`, `HS512`) is accepted, so a token
//!   whose header names `none` or an asymmetric algorithm is rejected before
//!   its signature is even looked at
//! - `exp` is required and checked with zero leeway
//!
//! New tokens are always signed with `HS256`.
//!
//! # Example
//!
//! ```ignore
//! use jwtgate_auth::JwtCodec;
//! use jwtgate_config::JwtConfig;
//!
//! let codec = JwtCodec::new(&JwtConfig::from_env()?);
//!
//! let token = codec.issue(user.id, &user.name, user.role)?;
//! let claims = codec.verify(&token)?;
//! ```

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use jwtgate_config::JwtConfig;
use jwtgate_core::Role;

use crate::claims::{Claims, Identity};

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Sign(#[source] jsonwebtoken::errors::Error),
    #[error("token rejected: {0}")]
    Rejected(#[source] jsonwebtoken::errors::Error),
    #[error("token subject `{0}` is not a user id")]
    InvalidSubject(String),
}

#[derive(Clone)]
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    access_token_expiry: i64,
}

impl JwtCodec {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            access_token_expiry: config.access_token_expiry,
        }
    }

    /// Token lifetime in seconds.
    pub fn access_token_expiry(&self) -> i64 {
        self.access_token_expiry
    }

    /// Creates an access token for a user.
    ///
    /// `iat` is now and `exp` is now plus the configured lifetime.
    pub fn issue(&self, user_id: i64, username: &str, role: Role) -> Result<String, TokenError> {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role,
            exp: now + self.access_token_expiry as usize,
            iat: now,
        };

        self.sign(&claims)
    }

    /// Signs arbitrary claims with `HS256`.
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(TokenError::Sign)
    }

    /// Checks signature, algorithm and expiry, then returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Rejected)
    }

    /// Verifies `token` and turns its claims into an [`Identity`].
    pub fn identify(&self, token: &str) -> Result<Identity, TokenError> {
        let claims = self.verify(token)?;
        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| TokenError::InvalidSubject(claims.sub.clone()))?;

        Ok(Identity {
            user_id,
            username: claims.username,
            role: claims.role,
        })
    }
}

impl fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtCodec")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}
