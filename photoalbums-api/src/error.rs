//! Error types for photoalbums-api
//!
//! Every failure reaches the client as the same empty-body 404. The detail
//! only goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Dataset could not be built (fetch failure or malformed payload)
    #[error("Unable to return album data: {0}")]
    Dataset(#[from] photoalbums_common::Error),

    /// Path segment is not an integer user id
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Dataset(photoalbums_common::Error::MalformedPayload { json }) => {
                error!(payload_bytes = json.len(), "{}", self);
            }
            ApiError::Dataset(_) => error!("{}", self),
            ApiError::InvalidUserId(_) => debug!("{}", self),
        }

        StatusCode::NOT_FOUND.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_errors_are_empty_not_found() {
        let errors = vec![
            ApiError::Dataset(photoalbums_common::Error::MalformedPayload {
                json: "invalid".to_string(),
            }),
            ApiError::Dataset(photoalbums_common::Error::Fetch("timeout".to_string())),
            ApiError::InvalidUserId("abc".to_string()),
        ];

        for err in errors {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn test_display_carries_cause() {
        let err = ApiError::from(photoalbums_common::Error::Fetch("refused".to_string()));
        assert_eq!(err.to_string(), "Unable to return album data: Fetch error: refused");
    }
}
