use async_trait::async_trait;

use crate::domain::profile::ProfileView;
use crate::domain::repositories::RepositoryError;

/// Read side for user profiles
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile view of a user by username
    async fn find_by_username(&self, username: &str)
        -> Result<Option<ProfileView>, RepositoryError>;

    /// List every profile, ordered by user id
    async fn list_all(&self) -> Result<Vec<ProfileView>, RepositoryError>;
}
