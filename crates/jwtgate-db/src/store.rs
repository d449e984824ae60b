//! The store contract.

use async_trait::async_trait;

use jwtgate_core::AppError;
use jwtgate_models::{NewUser, UserChanges, UserRecord};

/// Detail sent when an insert or update hits the unique email constraint.
pub const EMAIL_IN_USE: &str = "Email is already in use. Please use a different email.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint was violated.
    #[error("unique constraint violated")]
    Conflict,
    /// Anything else the backend reported.
    #[error("store backend failure: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db) if db.is_unique_violation() => Self::Conflict,
            _ => Self::Backend(err.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => AppError::conflict(EMAIL_IN_USE),
            StoreError::Backend(cause) => AppError::internal(cause),
        }
    }
}

/// Persistence for user accounts.
///
/// Lookups return `Ok(None)` when nothing matches. `update_user` returns
/// `Ok(None)` and `delete_user` returns `Ok(false)` when no row has the id.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn find_user_by_id(&self, id: i64) -> Result<Option<UserRecord>, StoreError>;

    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    async fn update_user(
        &self,
        id: i64,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, StoreError>;

    async fn delete_user(&self, id: i64) -> Result<bool, StoreError>;

    /// All users, ordered by id.
    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError>;

    async fn count_admins(&self) -> Result<i64, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use jwtgate_core::ErrorKind;

    #[test]
    fn test_conflict_maps_to_409() {
        let err = AppError::from(StoreError::Conflict);
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.detail(), EMAIL_IN_USE);
    }

    #[test]
    fn test_backend_maps_to_internal_without_leaking() {
        let err = AppError::from(StoreError::Backend("relation \"users\" does not exist".into()));
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(!err.detail().contains("users"));
    }

    #[test]
    fn test_non_database_sqlx_error_is_backend() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Backend(_)));
    }
}
