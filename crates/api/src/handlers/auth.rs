//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::session::issue_session_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub username: String,
}

/// POST /api/v1/auth/login
///
/// Check the single admin login and return a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let admin = state
        .config
        .admin
        .login(&input.username, &input.password)
        .inspect_err(|_| tracing::warn!(username = %input.username, "Rejected admin login"))?;

    let token = issue_session_token(admin.username(), &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = admin.username(), "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.session.expiry_mins * 60,
        username: admin.username().to_string(),
    }))
}
