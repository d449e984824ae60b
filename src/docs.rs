use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use jwtgate_core::{ErrorBody, Role};
use jwtgate_models::{AuthResponse, HealthResponse, LoginRequest, RegisterRequest, User, UserRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::index::controller::health,
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::users::controller::list_users,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
    ),
    components(
        schemas(
            User,
            Role,
            UserRequest,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            HealthResponse,
            ErrorBody,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Authentication", description = "Account registration and login"),
        (name = "Users", description = "User management endpoints")
    ),
    info(
        title = "jwtgate API",
        version = "0.1.0",
        description = "User management behind JWT authentication and role-based authorization.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/register", "/login", "/users", "/users/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
