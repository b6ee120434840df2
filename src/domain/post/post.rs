use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Returned when a post has neither text nor a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Empty post")]
pub struct EmptyPost;

/// A post that has not been stored yet
///
/// # Invariants
/// - At least one of `content` and `photo_path` is present
/// - Empty strings are normalized to `None`
/// - `created_at` is taken when the post is built, once per post
#[derive(Debug, Clone)]
pub struct NewPost {
    author_id: i64,
    content: Option<String>,
    photo_path: Option<String>,
    created_at: DateTime<Utc>,
}

impl NewPost {
    /// Builds a post for `author_id`
    ///
    /// # Example
    /// ```
    /// use socialnet_api::domain::post::NewPost;
    ///
    /// let post = NewPost::new(1, Some("hi".to_string()), None).expect("valid post");
    /// assert_eq!(post.content(), Some("hi"));
    ///
    /// assert!(NewPost::new(1, Some(String::new()), None).is_err());
    /// ```
    pub fn new(
        author_id: i64,
        content: Option<String>,
        photo_path: Option<String>,
    ) -> Result<Self, EmptyPost> {
        let content = content.filter(|c| !c.is_empty());
        let photo_path = photo_path.filter(|p| !p.is_empty());

        if content.is_none() && photo_path.is_none() {
            return Err(EmptyPost);
        }

        Ok(Self {
            author_id,
            content,
            photo_path,
            created_at: Utc::now(),
        })
    }

    pub fn author_id(&self) -> i64 {
        self.author_id
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn photo_path(&self) -> Option<&str> {
        self.photo_path.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches the id assigned by the store
    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            author_id: self.author_id,
            content: self.content,
            photo_path: self.photo_path,
            created_at: self.created_at,
        }
    }
}

/// A stored post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub content: Option<String>,
    pub photo_path: Option<String>,
    pub created_at: DateTime<Utc>,
}
