use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::profile::ProfileView;

/// Request body for user registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Response from successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub message: String,
}

/// Request body for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: i64,
    pub message: String,
}

/// Register a new user
///
/// POST /user/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let user_id = state
        .accounts
        .register(&req.username, &req.email, &req.password, &req.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id,
            message: "User created".to_string(),
        }),
    ))
}

/// Login with username and password
///
/// POST /user/authorize
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user_id = state.accounts.login(&req.username, &req.password).await?;

    Ok(Json(LoginResponse {
        user_id,
        message: "Successful authorization".to_string(),
    }))
}

/// Profile of a single user; `{}` when the username is unknown
///
/// GET /user/profile/:username
pub async fn profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response, ApiError> {
    let response = match state.accounts.get_profile(&username).await? {
        Some(view) => Json(view).into_response(),
        None => Json(json!({})).into_response(),
    };

    Ok(response)
}

/// All profiles
///
/// GET /user/profiles
pub async fn profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileView>>, ApiError> {
    Ok(Json(state.accounts.get_all_profiles().await?))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
