//! Postgres-backed [`UserStore`].

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use jwtgate_core::Role;
use jwtgate_models::{NewUser, UserChanges, UserRecord};

use crate::store::{StoreError, UserStore};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password: Option<String>,
    role: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| StoreError::Backend(format!("user {}: {}", row.id, e)))?;

        Ok(Self {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password,
            role,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password, role FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .map(UserRecord::try_from)
        .transpose()
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<UserRecord>, StoreError> {
        sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password, role FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(UserRecord::try_from)
        .transpose()
    }

    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password, role
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await?;

        UserRecord::try_from(row)
    }

    async fn update_user(
        &self,
        id: i64,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, StoreError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET name = $2, email = $3
            WHERE id = $1
            RETURNING id, name, email, password, role
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.email)
        .fetch_optional(&self.pool)
        .await?
        .map(UserRecord::try_from)
        .transpose()
    }

    async fn delete_user(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password, role FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(UserRecord::try_from)
        .collect()
    }

    async fn count_admins(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE role = 'admin'")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(role: &str) -> UserRow {
        UserRow {
            id: 9,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: None,
            role: role.to_string(),
        }
    }

    #[test]
    fn test_row_with_known_role_converts() {
        let record = UserRecord::try_from(row("admin")).unwrap();
        assert_eq!(record.role, Role::Admin);
        assert!(record.password_hash.is_none());
    }

    #[test]
    fn test_row_with_unknown_role_is_backend_error() {
        assert!(matches!(
            UserRecord::try_from(row("root")),
            Err(StoreError::Backend(_))
        ));
    }
}
