//! Core error types for Encore

use thiserror::Error;

use crate::types::ShowId;

/// Result type alias using `EncoreError`
pub type Result<T> = std::result::Result<T, EncoreError>;

/// Result type returned by every store write
///
/// Writes report a `PersistenceError` instead of the broader `EncoreError`
/// so callers can decide how to roll back and what to tell the user.
pub type WriteResult<T> = std::result::Result<T, PersistenceError>;

/// Core error type for Encore
#[derive(Error, Debug)]
pub enum EncoreError {
    /// Entity id does not resolve
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. "Venue"
        entity: String,
        /// Requested id as given
        id: String,
    },

    /// A show references an artist or venue that does not exist
    #[error("Show {show_id} references missing {entity} {id}")]
    MissingCounterpart {
        /// Show holding the dangling reference
        show_id: ShowId,
        /// Kind of the missing entity
        entity: String,
        /// Referenced id
        id: i64,
    },

    /// Store write failed and was rolled back
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl EncoreError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a missing counterpart error
    pub fn missing_counterpart(show_id: ShowId, entity: impl Into<String>, id: i64) -> Self {
        Self::MissingCounterpart {
            show_id,
            entity: entity.into(),
            id,
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error means "the requested entity does not exist"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Persistence(PersistenceError::NotFound { .. })
        )
    }
}

/// Failure of a transactional write
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The row to update or delete does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. "Artist"
        entity: String,
        /// Id that matched no row
        id: i64,
    },

    /// Foreign key, uniqueness or not-null constraint rejected the write
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other backend failure (connection, I/O, encoding)
    #[error("Storage backend failure: {0}")]
    Backend(String),
}

impl PersistenceError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id,
        }
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for EncoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                sqlx::error::ErrorKind::Other => Self::Backend(err.to_string()),
                _ => Self::ConstraintViolation(db_err.message().to_string()),
            },
            _ => Self::Backend(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Backend(err.to_string())
    }
}
