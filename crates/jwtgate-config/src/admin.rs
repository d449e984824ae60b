use std::fmt;

use crate::optional;

/// Credentials for the administrator account created on first start.
///
/// Bootstrap is skipped unless both `ADMIN_EMAIL` and `ADMIN_PASSWORD` are set.
#[derive(Clone, Default)]
pub struct AdminConfig {
    pub name: String,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        Self {
            name: optional("ADMIN_NAME").unwrap_or_else(|| "Admin".to_string()),
            email: optional("ADMIN_EMAIL"),
            password: optional("ADMIN_PASSWORD"),
        }
    }

    /// Email and password, when both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some((email, password)),
            _ => None,
        }
    }
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
