use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{posts, users};
use crate::api::state::AppState;

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(users::health_check))
        // User routes
        .route("/user/register", post(users::register))
        .route("/user/authorize", post(users::login))
        .route("/user/profile/:username", get(users::profile))
        .route("/user/profiles", get(users::profiles))
        // Post routes
        .route("/post/create", post(posts::create_post))
        .route("/post/show/:post_id", get(posts::show_post))
        .route("/post/allposts", get(posts::user_posts))
        // Middleware
        .layer(TraceLayer::new_for_http())
        // Shared state
        .with_state(state)
}
