use async_trait::async_trait;
use sqlx::PgPool;

use super::db_error;
use crate::domain::repositories::{RepositoryError, UserRepository};
use crate::domain::user::{Email, NewUser, User, Username};

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    is_active: bool,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        let username = Username::new(r.username)
            .map_err(|e| RepositoryError::InvalidData(format!("user {}: {}", r.id, e)))?;
        let email = Email::new(r.email)
            .map_err(|e| RepositoryError::InvalidData(format!("user {}: {}", r.id, e)))?;

        Ok(User {
            id: r.id,
            username,
            email,
            password_hash: r.password_hash,
            is_active: r.is_active,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<i64, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let user_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (username, email, password_hash, is_active)
            VALUES ($1, $2, $3, TRUE)
            RETURNING id
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to create user"))?;

        sqlx::query(
            r#"
            INSERT INTO spices (user_id, salt)
            VALUES ($1, $2)
            "#,
        )
        .bind(user_id)
        .bind(&user.salt)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to store salt"))?;

        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, name, city_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            "#,
        )
        .bind(user_id)
        .bind(user.name.as_str())
        .bind(user.city_id)
        .bind(user.created_at)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to create profile"))?;

        // Dropping `tx` on any early return above rolls everything back
        tx.commit()
            .await
            .map_err(db_error("Failed to commit registration"))?;

        Ok(user_id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, is_active
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find user by id"))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, is_active
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find user by username"))?;

        row.map(User::try_from).transpose()
    }

    async fn find_salt(&self, user_id: i64) -> Result<Option<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT salt FROM spices WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find salt"))
    }
}
