use axum::http::StatusCode;
use thiserror::Error;

use crate::domain::post::EmptyPost;
use crate::domain::repositories::RepositoryError;

/// Why a login was refused
///
/// Logged, never shown: callers always see the same message so usernames
/// cannot be enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFailure {
    UnknownUser,
    PasswordMismatch,
    InactiveUser,
}

/// Errors returned by the account and post services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Wrong username or password")]
    InvalidCredentials(CredentialFailure),

    #[error("Server error")]
    ServerIntegrity(String),

    #[error("Empty post")]
    EmptyPost,

    #[error("User with this ID does not exist")]
    UnknownAuthor(i64),

    #[error("{0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// HTTP-like status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_)
            | ServiceError::InvalidCredentials(_)
            | ServiceError::EmptyPost
            | ServiceError::UnknownAuthor(_) => StatusCode::BAD_REQUEST,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::ServerIntegrity(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<EmptyPost> for ServiceError {
    fn from(_: EmptyPost) -> Self {
        ServiceError::EmptyPost
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
