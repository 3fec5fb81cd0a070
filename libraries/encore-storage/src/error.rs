/// Storage-specific errors
use thiserror::Error;

/// Connection and schema errors raised outside the entity slices
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for encore_core::EncoreError {
    fn from(err: StorageError) -> Self {
        encore_core::EncoreError::Database(err.to_string())
    }
}
