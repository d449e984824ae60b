//! # jwtgate Config
//!
//! Configuration structures loaded from environment variables.
//!
//! Configuration is read once, at startup, into an [`AppConfig`] and then passed
//! by reference to whatever needs it. Request-handling code never reads the
//! process environment.
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`admin`]: bootstrap administrator credentials
//! - [`database`]: Postgres connection settings
//! - [`server`]: listen address
//! - [`cors`]: allowed browser origins
//! - [`password`]: password hashing cost
//! - [`logging`]: log level and output format
//!
//! # Example
//!
//! ```ignore
//! use jwtgate_config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("listening on {}", config.server.addr());
//! ```

pub mod admin;
pub mod cors;
pub mod database;
pub mod jwt;
pub mod logging;
pub mod password;
pub mod server;

use std::env;
use std::str::FromStr;

pub use admin::AdminConfig;
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use password::PasswordConfig;
pub use server::ServerConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value `{value}`")]
    Invalid { name: &'static str, value: String },
}

/// Every configuration section the server needs.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub password: PasswordConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
            admin: AdminConfig::from_env(),
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            cors: CorsConfig::from_env(),
            password: PasswordConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }
}

pub(crate) fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

pub(crate) fn optional(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Reads and parses `name`, falling back to `default` when it is unset.
pub(crate) fn parsed_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
