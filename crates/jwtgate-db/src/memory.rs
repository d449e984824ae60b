//! In-memory [`UserStore`] for tests.
//!
//! Mirrors the Postgres contract: ids come from a sequence starting at 1 and
//! email is unique.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use jwtgate_core::Role;
use jwtgate_models::{NewUser, UserChanges, UserRecord};

use crate::store::{StoreError, UserStore};

#[derive(Debug, Default)]
struct Tables {
    next_id: i64,
    users: BTreeMap<i64, UserRecord>,
}

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    tables: RwLock<Tables>,
    calls: AtomicUsize,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn email_taken(tables: &Tables, email: &str, except: Option<i64>) -> bool {
    tables
        .users
        .values()
        .any(|u| u.email == email && Some(u.id) != except)
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        self.record_call();
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<UserRecord>, StoreError> {
        self.record_call();
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        self.record_call();
        let mut tables = self.tables.write().await;
        if email_taken(&tables, &user.email, None) {
            return Err(StoreError::Conflict);
        }

        tables.next_id += 1;
        let record = UserRecord {
            id: tables.next_id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
        };
        tables.users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_user(
        &self,
        id: i64,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, StoreError> {
        self.record_call();
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&id) {
            return Ok(None);
        }
        if email_taken(&tables, &changes.email, Some(id)) {
            return Err(StoreError::Conflict);
        }

        Ok(tables.users.get_mut(&id).map(|record| {
            record.name = changes.name;
            record.email = changes.email;
            record.clone()
        }))
    }

    async fn delete_user(&self, id: i64) -> Result<bool, StoreError> {
        self.record_call();
        Ok(self.tables.write().await.users.remove(&id).is_some())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        self.record_call();
        Ok(self.tables.read().await.users.values().cloned().collect())
    }

    async fn count_admins(&self) -> Result<i64, StoreError> {
        self.record_call();
        let tables = self.tables.read().await;
        Ok(tables.users.values().filter(|u| u.role == Role::Admin).count() as i64)
    }
}
