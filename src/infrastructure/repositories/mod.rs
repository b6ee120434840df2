// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_post_repository;
pub mod postgres_profile_repository;
pub mod postgres_user_repository;

pub use postgres_post_repository::PostgresPostRepository;
pub use postgres_profile_repository::PostgresProfileRepository;
pub use postgres_user_repository::PostgresUserRepository;

use crate::domain::repositories::RepositoryError;

/// Maps a sqlx error into a RepositoryError
///
/// Constraint violations keep their own variants so services can tell a
/// duplicate username or a missing author apart from a broken connection.
fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> RepositoryError {
    move |e| {
        if let sqlx::Error::Database(db) = &e {
            let constraint = db.constraint().unwrap_or_default().to_string();
            if db.is_unique_violation() {
                return RepositoryError::UniqueViolation { constraint };
            }
            if db.is_foreign_key_violation() {
                return RepositoryError::ForeignKeyViolation { constraint };
            }
        }
        RepositoryError::Database(format!("{}: {}", context, e))
    }
}
