/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use encore_core::{EncoreError, PersistenceError};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Core(#[from] EncoreError),

    /// A create/edit/delete that failed; `message` is what the client sees
    #[error("{message}: {source}")]
    Write {
        message: String,
        #[source]
        source: EncoreError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Wrap a failed write with the message shown to the client
    pub fn write(message: impl Into<String>, source: impl Into<EncoreError>) -> Self {
        Self::Write {
            message: message.into(),
            source: source.into(),
        }
    }
}

impl From<encore_storage::StorageError> for ServerError {
    fn from(err: encore_storage::StorageError) -> Self {
        ServerError::Core(err.into())
    }
}

/// HTTP status for a core error
pub fn status_for(err: &EncoreError) -> StatusCode {
    match err {
        EncoreError::NotFound { .. }
        | EncoreError::Persistence(PersistenceError::NotFound { .. }) => StatusCode::NOT_FOUND,
        EncoreError::InvalidInput(_)
        | EncoreError::Persistence(PersistenceError::ConstraintViolation(_)) => {
            StatusCode::BAD_REQUEST
        }
        EncoreError::MissingCounterpart { .. }
        | EncoreError::Persistence(PersistenceError::Backend(_))
        | EncoreError::Database(_)
        | EncoreError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Write { message, source } => {
                let status = status_for(&source);
                tracing::warn!(error = %source, "{message}");
                let body = Json(json!({
                    "success": false,
                    "message": message,
                }));
                (status, body).into_response()
            }
            ServerError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            ServerError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ServerError::Core(err) => {
                let status = status_for(&err);
                let message = if status.is_server_error() {
                    tracing::error!("Request failed: {:?}", err);
                    "Internal server error".to_string()
                } else {
                    err.to_string()
                };
                (status, Json(json!({ "error": message }))).into_response()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Configuration error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_statuses() {
        assert_eq!(
            status_for(&EncoreError::not_found("Venue", 1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&PersistenceError::not_found("Artist", 2).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&EncoreError::invalid_input("name is required")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&PersistenceError::ConstraintViolation("Venue 9 does not exist".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&EncoreError::missing_counterpart(1, "Artist", 3)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn write_failure_hides_the_cause() {
        let err = ServerError::write(
            "An error occurred. Venue Hop could not be listed.",
            PersistenceError::Backend("disk I/O error".into()),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
