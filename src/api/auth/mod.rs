//! Authentication endpoints: register, token, me

use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::User;
use crate::infrastructure::user::RegisterUserRequest;

/// Request body for POST /register
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub team_id: String,
}

/// Request body for POST /token
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token issued on login and registration
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

/// Public view of a user account
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub team_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            team_id: user.team_id().as_str().to_string(),
            created_at: user.created_at(),
            last_login_at: user.last_login_at(),
        }
    }
}

/// Response body for POST /register
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

/// POST /register - Create a new user account
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let user = state
        .user_service
        .register(RegisterUserRequest {
            username: request.username,
            email: request.email,
            password: request.password,
            team_id: request.team_id,
        })
        .await?;

    let issued = state.token_service.generate(&user)?;

    info!(username = %user.username(), "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: UserResponse::from(&user),
            access_token: issued.access_token,
            token_type: "bearer".to_string(),
            expires_at: issued.expires_at,
        }),
    ))
}

/// POST /token - Exchange credentials for a bearer token
pub async fn token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .user_service
        .authenticate(&request.username, &request.password)
        .await?;

    let issued = state.token_service.generate(&user)?;

    Ok(Json(TokenResponse {
        access_token: issued.access_token,
        token_type: "bearer".to_string(),
        expires_at: issued.expires_at,
    }))
}

/// GET /me - Return the authenticated user
pub async fn me(RequireUser(user): RequireUser) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}
