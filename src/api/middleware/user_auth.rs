//! Bearer token authentication middleware

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::inventory::TeamId;
use crate::domain::user::User;
use crate::domain::DomainError;

/// Extractor that requires a valid bearer token
///
/// Reads the token from the `Authorization: Bearer <token>` header,
/// validates it, and loads the authenticated user.
#[derive(Debug, Clone)]
pub struct RequireUser(pub User);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        debug!("Validating bearer token");

        let claims = state
            .token_service
            .validate(&token)
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        let user = match state.user_service.get(claims.user_id()).await {
            Ok(user) => user,
            Err(DomainError::NotFound { .. }) => {
                return Err(ApiError::unauthorized("User not found"));
            }
            Err(e) => return Err(ApiError::internal(e.to_string())),
        };

        if !user.is_active() {
            return Err(ApiError::unauthorized("User account is suspended"));
        }

        Ok(RequireUser(user))
    }
}

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(token.trim().to_string());
        }
    }

    Err(ApiError::unauthorized(
        "Authentication required. Provide a token via 'Authorization: Bearer <token>' header",
    ))
}

/// Verify the authenticated user belongs to the team in the request path
pub fn check_team_access(user: &User, team_id: &TeamId) -> Result<(), ApiError> {
    if user.team_id() != team_id {
        return Err(ApiError::forbidden(
            "You can only access your own team's inventory",
        ));
    }

    Ok(())
}
