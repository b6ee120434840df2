use std::sync::Arc;

use crate::domain::post::{NewPost, PageRange, Post};
use crate::domain::repositories::{PostRepository, RepositoryError, UserRepository};
use crate::services::errors::{ServiceError, ServiceResult};

/// Post creation and retrieval
#[derive(Clone)]
pub struct PostService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }

    /// Creates a post for an existing author
    ///
    /// Empty strings count as missing. Fails with `EmptyPost` before touching
    /// the store when both `content` and `photo_path` are missing.
    pub async fn add_post(
        &self,
        author_id: i64,
        content: Option<String>,
        photo_path: Option<String>,
    ) -> ServiceResult<i64> {
        let post = NewPost::new(author_id, content, photo_path)?;

        self.ensure_user_exists(author_id).await?;

        match self.posts.create(post).await {
            Ok(post_id) => {
                tracing::info!(post_id, author_id, "Post created");
                Ok(post_id)
            }
            // author removed between the check and the insert
            Err(RepositoryError::ForeignKeyViolation { .. }) => {
                Err(ServiceError::UnknownAuthor(author_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_post(&self, post_id: i64) -> ServiceResult<Post> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Post with this ID does not exist".to_string()))
    }

    /// Posts `range.start()..=range.end()` of a user, oldest first
    pub async fn list_user_posts(&self, user_id: i64, range: PageRange) -> ServiceResult<Vec<Post>> {
        self.ensure_user_exists(user_id).await?;

        if range.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self.posts.find_by_author(user_id, range).await?)
    }

    async fn ensure_user_exists(&self, user_id: i64) -> ServiceResult<()> {
        match self.users.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::UnknownAuthor(user_id)),
        }
    }
}
