use tracing::{debug, instrument};

use jwtgate_auth::Identity;
use jwtgate_core::{AppError, Role};
use jwtgate_db::UserStore;
use jwtgate_models::{NewUser, User, UserChanges, UserRecord, UserRequest};

pub struct UserService;

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("User with id {} not found", id))
}

impl UserService {
    #[instrument(skip(store))]
    pub async fn list_users(store: &dyn UserStore) -> Result<Vec<User>, AppError> {
        let users = store.list_users().await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    #[instrument(skip(store))]
    pub async fn get_user(store: &dyn UserStore, id: i64) -> Result<User, AppError> {
        let record = store.find_user_by_id(id).await?.ok_or_else(|| not_found(id))?;
        Ok(record.into())
    }

    /// Creates a user without a password. The account cannot log in until one
    /// is set.
    #[instrument(skip_all)]
    pub async fn create_user(store: &dyn UserStore, request: UserRequest) -> Result<User, AppError> {
        let record = store
            .insert_user(NewUser {
                name: request.name,
                email: request.email,
                password_hash: None,
                role: Role::User,
            })
            .await?;

        debug!(user_id = record.id, "user created");
        Ok(record.into())
    }

    /// Applies `request` to user `id`, provided `identity` owns the record or
    /// is an admin.
    #[instrument(skip(store, request), fields(caller = identity.user_id))]
    pub async fn update_user(
        store: &dyn UserStore,
        identity: &Identity,
        id: i64,
        request: UserRequest,
    ) -> Result<User, AppError> {
        let target = store.find_user_by_id(id).await?.ok_or_else(|| not_found(id))?;
        ensure_owner_or_admin(identity, &target)?;

        let record = store
            .update_user(id, UserChanges::from(request))
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(record.into())
    }

    #[instrument(skip(store))]
    pub async fn delete_user(store: &dyn UserStore, id: i64) -> Result<(), AppError> {
        if !store.delete_user(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }
}

/// Resource-level check: the caller must be the record's owner or an admin.
pub fn ensure_owner_or_admin(identity: &Identity, target: &UserRecord) -> Result<(), AppError> {
    if identity.user_id == target.id || identity.is_admin() {
        return Ok(());
    }

    debug!(
        caller = identity.user_id,
        target = target.id,
        "ownership check failed"
    );
    Err(AppError::forbidden("not authorized"))
}
