use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::db_error;
use crate::domain::post::{NewPost, PageRange, Post};
use crate::domain::repositories::{PostRepository, RepositoryError};

/// PostgreSQL implementation of PostRepository
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    /// Creates a new PostgresPostRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    author_id: i64,
    content: Option<String>,
    photo_path: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(r: PostRow) -> Self {
        Post {
            id: r.id,
            author_id: r.author_id,
            content: r.content,
            photo_path: r.photo_path,
            created_at: r.created_at,
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (author_id, content, photo_path, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(post.author_id())
        .bind(post.content())
        .bind(post.photo_path())
        .bind(post.created_at())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create post"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepositoryError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, author_id, content, photo_path, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find post by id"))?;

        Ok(row.map(Post::from))
    }

    async fn find_by_author(
        &self,
        author_id: i64,
        range: PageRange,
    ) -> Result<Vec<Post>, RepositoryError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, author_id, content, photo_path, created_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at, id
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(author_id)
        .bind(range.offset())
        .bind(range.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to find posts by author"))?;

        Ok(rows.into_iter().map(Post::from).collect())
    }
}
