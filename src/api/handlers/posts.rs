use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::post::pagination::{DEFAULT_END, DEFAULT_START};
use crate::domain::post::{PageRange, Post};

/// Request body for creating a post
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub author_id: i64,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub photo_path: Option<String>,
}

/// Response from post creation
#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub post_id: i64,
    pub message: String,
}

/// Query string of the post listing
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub user_id: i64,
    #[serde(default = "default_start")]
    pub start: i64,
    #[serde(default = "default_end")]
    pub end: i64,
}

fn default_start() -> i64 {
    DEFAULT_START
}

fn default_end() -> i64 {
    DEFAULT_END
}

/// Create a new post
///
/// POST /post/create
pub async fn create_post(
    State(state): State<AppState>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<CreatePostResponse>), ApiError> {
    let post_id = state
        .posts
        .add_post(req.author_id, req.content, req.photo_path)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            post_id,
            message: "Post created".to_string(),
        }),
    ))
}

/// Get a post by ID
///
/// GET /post/show/:post_id
pub async fn show_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.posts.get_post(post_id).await?))
}

/// Posts of a user, `start..=end` (1-based)
///
/// GET /post/allposts?user_id=..&start=..&end=..
pub async fn user_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let range = PageRange::new(query.start, query.end);
    Ok(Json(state.posts.list_user_posts(query.user_id, range).await?))
}
