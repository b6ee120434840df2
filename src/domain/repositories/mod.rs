// Repository ports
// Implemented by the adapters in infrastructure::repositories

pub mod post_repository;
pub mod profile_repository;
pub mod user_repository;

pub use post_repository::PostRepository;
pub use profile_repository::ProfileRepository;
pub use user_repository::UserRepository;

use thiserror::Error;

/// Failures reported by a repository
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("Foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String },

    #[error("Invalid data in store: {0}")]
    InvalidData(String),

    #[error("Database error: {0}")]
    Database(String),
}
