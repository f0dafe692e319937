//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses. Every error body has the shape `{"detail": "..."}`,
//! which is what the board UI reads on a rejected request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::catalogue::RosterError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("{0}")]
    Validation(String),

    /// Roster mutation rejected by the catalogue
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ApiError {
    /// HTTP status and a stable code for logging
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Roster(e) => match e {
                RosterError::ActivityNotFound(_) => (StatusCode::NOT_FOUND, "ACTIVITY_NOT_FOUND"),
                RosterError::ParticipantNotFound { .. } => {
                    (StatusCode::NOT_FOUND, "PARTICIPANT_NOT_FOUND")
                }
                RosterError::AlreadySignedUp { .. } => (StatusCode::BAD_REQUEST, "ALREADY_SIGNED_UP"),
                RosterError::ActivityFull(_) => (StatusCode::BAD_REQUEST, "ACTIVITY_FULL"),
                RosterError::Seed { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "SEED_ERROR"),
            },
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();

        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_errors_map_to_status() {
        let err = ApiError::from(RosterError::ActivityNotFound("X".to_string()));
        assert_eq!(err.status().0, StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Activity not found");

        let err = ApiError::from(RosterError::AlreadySignedUp {
            activity: "Chess Club".to_string(),
            email: "a@x.com".to_string(),
        });
        assert_eq!(err.status().0, StatusCode::BAD_REQUEST);

        let err = ApiError::from(RosterError::ActivityFull("Chess Club".to_string()));
        assert_eq!(err.status().0, StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Activity is full");
    }

    #[test]
    fn test_validation_detail_is_message_only() {
        let err = ApiError::Validation("Missing email".to_string());
        assert_eq!(err.to_string(), "Missing email");
        assert_eq!(err.status().0, StatusCode::BAD_REQUEST);
    }
}
