//! # jwtgate DB
//!
//! The user store and database pool for the jwtgate API.
//!
//! Handlers never touch SQL directly. They go through the [`UserStore`] trait,
//! which [`PgUserStore`] implements on top of a sqlx [`PgPool`]. With the
//! `test-utils` feature, [`MemoryUserStore`] provides the same contract
//! without a database.
//!
//! # Example
//!
//! ```ignore
//! use jwtgate_config::DatabaseConfig;
//! use jwtgate_db::{PgUserStore, init_db_pool};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! let store = PgUserStore::new(pool);
//! ```

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;
pub mod store;

use sqlx::postgres::PgPoolOptions;

use jwtgate_config::DatabaseConfig;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;
pub use store::{StoreError, UserStore};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Opens a PostgreSQL connection pool.
///
/// Called once during startup. The pool is cheap to clone and is shared by
/// every request through [`PgUserStore`].
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}
