use tracing::{debug, instrument};

use jwtgate_core::{AppError, Role};
use jwtgate_models::{AuthResponse, LoginRequest, NewUser, RegisterRequest, UserRecord};

use crate::state::AppState;

pub const REGISTERED: &str = "Account created successfully";
pub const LOGGED_IN: &str = "Login successful";

pub struct AuthService;

impl AuthService {
    /// Creates a `user` account and returns a token for it.
    #[instrument(skip_all)]
    pub async fn register(
        state: &AppState,
        request: RegisterRequest,
    ) -> Result<AuthResponse, AppError> {
        let password_hash = state.hash_password(&request.password).await?;

        let record = state
            .store
            .insert_user(NewUser {
                name: request.name,
                email: request.email,
                password_hash: Some(password_hash),
                role: Role::User,
            })
            .await?;

        debug!(user_id = record.id, "account registered");
        Self::token_response(state, &record, REGISTERED)
    }

    /// Checks credentials and returns a fresh token.
    ///
    /// Unknown email, wrong password and password-less accounts all get the
    /// same answer.
    #[instrument(skip_all)]
    pub async fn login(state: &AppState, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let record = state.store.find_user_by_email(&request.email).await?;

        let Some((record, digest)) =
            record.and_then(|r| r.password_hash.clone().map(|digest| (r, digest)))
        else {
            return Err(invalid_credentials());
        };

        if !state.verify_password(&digest, &request.password).await? {
            debug!(user_id = record.id, "password mismatch");
            return Err(invalid_credentials());
        }

        Self::token_response(state, &record, LOGGED_IN)
    }

    fn token_response(
        state: &AppState,
        record: &UserRecord,
        message: &str,
    ) -> Result<AuthResponse, AppError> {
        let token = state
            .jwt
            .issue(record.id, &record.name, record.role)
            .map_err(AppError::internal)?;

        Ok(AuthResponse {
            message: message.to_string(),
            token,
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid email or password")
}
