use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{PostRepository, ProfileRepository, UserRepository};
use crate::infrastructure::repositories::{
    PostgresPostRepository, PostgresProfileRepository, PostgresUserRepository,
};
use crate::services::{AccountService, PostService};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub posts: PostService,
}

impl AppState {
    /// Wires the services over arbitrary repository implementations
    pub fn new(
        users: Arc<dyn UserRepository>,
        profiles: Arc<dyn ProfileRepository>,
        posts: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            accounts: AccountService::new(users.clone(), profiles),
            posts: PostService::new(users, posts),
        }
    }

    /// Wires the services over the PostgreSQL repositories sharing `pool`
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresProfileRepository::new(pool.clone())),
            Arc::new(PostgresPostRepository::new(pool)),
        )
    }
}
