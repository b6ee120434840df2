use async_trait::async_trait;

use crate::domain::repositories::RepositoryError;
use crate::domain::user::{NewUser, User};

/// Repository trait for User aggregate
///
/// A user is always stored together with its salt and profile.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user, its salt and its profile in one transaction
    ///
    /// Either all three rows are written or none is. Returns the new user id.
    async fn create(&self, user: NewUser) -> Result<i64, RepositoryError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Find the salt stored for a user
    async fn find_salt(&self, user_id: i64) -> Result<Option<String>, RepositoryError>;
}
