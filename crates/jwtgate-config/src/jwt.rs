use std::fmt;

use crate::{ConfigError, parsed_or, required};

/// Tokens live for fifteen minutes unless `JWT_ACCESS_EXPIRY` says otherwise.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 15 * 60;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let access_token_expiry = parsed_or("JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY)?;
        if access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                name: "JWT_ACCESS_EXPIRY",
                value: access_token_expiry.to_string(),
            });
        }

        Ok(Self {
            secret: required("JWT_SECRET")?,
            access_token_expiry,
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}
