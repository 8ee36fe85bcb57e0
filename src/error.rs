use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::poll::ValidationError;

/// Every way a poll request can be rejected.
///
/// Client faults carry their detail to the caller; server faults only carry
/// a generic message, the cause is logged where it happens.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Poll ID parameter is required")]
    MissingId,

    #[error("Poll not found")]
    NotFound,

    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::Validation(_) | ApiError::MissingId => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_split_client_and_server_faults() {
        assert_eq!(ApiError::InvalidBody("eof".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Validation(ValidationError::TitleRequired).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::MissingId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("Failed to create poll").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_message_names_the_rule() {
        let err = ApiError::from(ValidationError::TooFewOptions);
        assert_eq!(err.to_string(), "Validation failed: poll must have at least 2 options");
    }
}
