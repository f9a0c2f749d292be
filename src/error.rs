use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

use crate::dao::storage::StorageError;

/// Errors that can occur in store and service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Persistence backend failed.
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
    /// Level index outside the schedule bounds.
    #[error("invalid level index {index} (schedule has {len} entries)")]
    InvalidIndex {
        /// Index the caller asked for.
        index: usize,
        /// Number of schedule entries at the time of the call.
        len: usize,
    },
    /// No player with the requested id.
    #[error("player {0} not found")]
    PlayerNotFound(u64),
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request with invalid input.
    #[error("{0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("{0}")]
    NotFound(String),
    /// Storage backend unavailable or failing.
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(source) => ApiError::ServiceUnavailable(source.to_string()),
            ServiceError::InvalidIndex { .. } => ApiError::BadRequest(err.to_string()),
            ServiceError::PlayerNotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}

/// Wire shape every failing route responds with.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        let payload = Json(ErrorBody {
            success: false,
            error: self.to_string(),
        });

        (status, payload).into_response()
    }
}
