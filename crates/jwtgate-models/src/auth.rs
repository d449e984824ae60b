//! Authentication DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /register`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "email, name and password are required"))]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "email, name and password are required"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "email, name and password are required"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "email and password are required"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "email and password are required"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Returned by register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "Alive")]
    pub health: String,
}

impl HealthResponse {
    pub fn alive() -> Self {
        Self {
            health: "Alive".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_defaults_missing_fields() {
        let request: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert!(request.name.is_empty());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_message() {
        let request = LoginRequest {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        let errors = request.validate().unwrap_err();
        let message = errors.field_errors()["password"][0].message.clone().unwrap();
        assert_eq!(message, "email and password are required");
    }

    #[test]
    fn test_health_response_shape() {
        assert_eq!(
            serde_json::to_string(&HealthResponse::alive()).unwrap(),
            r#"{"health":"Alive"}"#
        );
    }
}
