use async_trait::async_trait;

use crate::domain::post::{NewPost, PageRange, Post};
use crate::domain::repositories::RepositoryError;

/// Repository trait for posts
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a post and return its id
    async fn create(&self, post: NewPost) -> Result<i64, RepositoryError>;

    /// Find a post by its ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepositoryError>;

    /// Posts of an author inside `range`, oldest first
    async fn find_by_author(
        &self,
        author_id: i64,
        range: PageRange,
    ) -> Result<Vec<Post>, RepositoryError>;
}
