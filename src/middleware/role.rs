//! Route-level role checks.

use tracing::debug;

use jwtgate_auth::Identity;
use jwtgate_core::{AppError, Role};

use crate::pipeline::{ApiRequest, Middleware};

/// Gate that admits only callers whose role equals `role`.
///
/// It can only be placed after [`Authenticate`](crate::middleware::Authenticate),
/// since it needs an `ApiRequest<Identity>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequireRole {
    role: Role,
}

impl RequireRole {
    pub const fn new(role: Role) -> Self {
        Self { role }
    }

    pub const fn admin() -> Self {
        Self::new(Role::Admin)
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl Middleware<Identity> for RequireRole {
    type Out = Identity;

    async fn process(&self, req: ApiRequest<Identity>) -> Result<ApiRequest<Identity>, AppError> {
        require_role(req.context(), self.role)?;
        Ok(req)
    }
}

pub fn require_role(identity: &Identity, role: Role) -> Result<(), AppError> {
    if identity.role != role {
        debug!(
            user_id = identity.user_id,
            role = %identity.role,
            required = %role,
            "role check failed"
        );
        return Err(AppError::forbidden("not authorized"));
    }
    Ok(())
}
