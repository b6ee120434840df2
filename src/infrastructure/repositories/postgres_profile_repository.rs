use async_trait::async_trait;
use sqlx::PgPool;

use super::db_error;
use crate::domain::profile::ProfileView;
use crate::domain::repositories::{ProfileRepository, RepositoryError};

/// PostgreSQL implementation of ProfileRepository
///
/// Profiles are read with a single join over users, profiles and cities.
/// The city side is a LEFT JOIN so a dangling `city_id` yields a NULL city
/// instead of hiding the profile.
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<ProfileView>, RepositoryError> {
        sqlx::query_as::<_, ProfileView>(
            r#"
            SELECT
                u.id, u.username,
                p.name, p.surname, p.photo_path,
                c.name AS city,
                p.status, p.description
            FROM users u
            JOIN profiles p ON p.user_id = u.id
            LEFT JOIN cities c ON c.id = p.city_id
            WHERE u.username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find profile"))
    }

    async fn list_all(&self) -> Result<Vec<ProfileView>, RepositoryError> {
        sqlx::query_as::<_, ProfileView>(
            r#"
            SELECT
                u.id, u.username,
                p.name, p.surname, p.photo_path,
                c.name AS city,
                p.status, p.description
            FROM users u
            JOIN profiles p ON p.user_id = u.id
            LEFT JOIN cities c ON c.id = p.city_id
            ORDER BY u.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list profiles"))
    }
}
