use std::fmt;
use std::sync::Arc;

use anyhow::Context;

use jwtgate_auth::JwtCodec;
use jwtgate_config::{AppConfig, CorsConfig};
use jwtgate_core::{AppError, BcryptHasher, PasswordHasher};
use jwtgate_db::{PgPool, PgUserStore, UserStore, init_db_pool};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub jwt: Arc<JwtCodec>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        jwt: JwtCodec,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            store,
            hasher,
            jwt: Arc::new(jwt),
            cors_config,
        }
    }

    /// Hashes on the blocking pool.
    pub async fn hash_password(&self, plaintext: &str) -> Result<String, AppError> {
        let hasher = Arc::clone(&self.hasher);
        let plaintext = plaintext.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(AppError::internal)?
    }

    /// Checks a password on the blocking pool.
    pub async fn verify_password(&self, digest: &str, plaintext: &str) -> Result<bool, AppError> {
        let hasher = Arc::clone(&self.hasher);
        let digest = digest.to_string();
        let plaintext = plaintext.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&digest, &plaintext))
            .await
            .map_err(AppError::internal)?
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("jwt", &self.jwt)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

/// Connects to Postgres, applies pending migrations and builds the state.
pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db_pool(&config.database)
        .await
        .context("failed to connect to database")?;

    run_migrations(&pool).await?;

    Ok(AppState::new(
        Arc::new(PgUserStore::new(pool)),
        Arc::new(BcryptHasher::new(config.password.cost)),
        JwtCodec::new(&config.jwt),
        config.cors.clone(),
    ))
}

/// Applies the embedded migrations under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run migrations")
}
