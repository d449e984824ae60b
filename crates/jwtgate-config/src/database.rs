use crate::{ConfigError, parsed_or, required};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: required("DATABASE_URL")?,
            max_connections: parsed_or("DATABASE_MAX_CONNECTIONS", 10)?,
        })
    }
}
