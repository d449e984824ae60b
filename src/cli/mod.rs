//! Admin account provisioning, shared by server startup and `jwtgate-cli`.

use anyhow::{Context, bail};
use tracing::{info, warn};

use jwtgate_config::AdminConfig;
use jwtgate_core::{PasswordHasher, Role};
use jwtgate_db::{StoreError, UserStore};
use jwtgate_models::{NewUser, UserRecord};

/// Inserts an `admin` account with a hashed password.
pub async fn create_admin(
    store: &dyn UserStore,
    hasher: &dyn PasswordHasher,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<UserRecord> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        bail!("name, email and password must not be empty");
    }

    let password_hash = hasher.hash(password).context("failed to hash password")?;

    let result = store
        .insert_user(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: Some(password_hash),
            role: Role::Admin,
        })
        .await;

    match result {
        Ok(record) => Ok(record),
        Err(StoreError::Conflict) => bail!("a user with email {} already exists", email),
        Err(err) => Err(err).context("failed to insert admin"),
    }
}

/// Makes sure at least one admin exists, creating one from `ADMIN_*`
/// settings if needed.
///
/// Returns the new account, or `None` when nothing was created.
pub async fn ensure_admin(
    store: &dyn UserStore,
    hasher: &dyn PasswordHasher,
    config: &AdminConfig,
) -> anyhow::Result<Option<UserRecord>> {
    if store.count_admins().await? > 0 {
        return Ok(None);
    }

    let Some((email, password)) = config.credentials() else {
        warn!("no admin account exists and ADMIN_EMAIL/ADMIN_PASSWORD are not set");
        return Ok(None);
    };

    if store.find_user_by_email(email).await?.is_some() {
        warn!(email, "ADMIN_EMAIL belongs to an existing non-admin account, not promoting it");
        return Ok(None);
    }

    let record = create_admin(store, hasher, &config.name, email, password).await?;
    info!(user_id = record.id, email, "bootstrap admin created");
    Ok(Some(record))
}
