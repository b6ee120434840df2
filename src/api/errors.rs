use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::ServiceError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "message": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = err.status_code();
        match &err {
            ServiceError::Repository(e) => {
                tracing::error!(error = %e, "Store failure");
                Self::internal_server_error("Server error")
            }
            ServiceError::ServerIntegrity(detail) => {
                tracing::error!(%detail, "Data integrity failure");
                Self::new(status, "Server error")
            }
            ServiceError::InvalidCredentials(reason) => {
                tracing::debug!(?reason, "Credentials rejected");
                Self::new(status, err.to_string())
            }
            _ => Self::new(status, err.to_string()),
        }
    }
}
