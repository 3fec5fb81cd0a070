//! Encore Storage
//!
//! `SQLite` persistence for venues, artists and shows.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each entity owns its own queries (`venues`,
//!   `artists`, `shows`)
//! - **Transactional Writes**: every create/update/delete runs in a single
//!   transaction that is rolled back if any step fails
//! - **Natural Order**: reads return rows in insertion (`id`) order
//!
//! # Example
//!
//! ```rust,no_run
//! use encore_storage::{LocalStorageContext, create_pool, run_migrations};
//! use encore_core::storage::StorageContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://encore.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! let venues = storage.get_all_venues().await?;
//! # Ok(())
//! # }
//! ```

mod columns;
mod context;
mod error;

// Vertical slices
pub mod artists;
pub mod shows;
pub mod venues;

pub use context::LocalStorageContext;
pub use error::StorageError;

/// The store handle used by the server
pub type Database = LocalStorageContext;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup, before the pool is handed to a
/// `LocalStorageContext`.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool
///
/// Foreign keys are enforced so deleting a venue cascades to its shows and
/// a show cannot reference a missing venue or artist.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://encore.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::debug!("SQLite pool ready");

    Ok(pool)
}
