//! Admin session extractors for Axum handlers.
//!
//! Every mutating handler takes [`RequireAdmin`], which is the only way to
//! obtain an [`AdminCapability`] inside a request. Read handlers that need
//! to tell the client whether editing is allowed use [`MaybeAdmin`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use roadmap_core::admin::AdminCapability;
use roadmap_core::error::CoreError;

use crate::auth::session::validate_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Resolve the capability from the `Authorization: Bearer <token>` header.
fn capability_from_parts(parts: &Parts, state: &AppState) -> Result<AdminCapability, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })?;

    let claims = validate_session_token(token, &state.config.session).map_err(|_| {
        AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
    })?;

    Ok(state.config.admin.resume_session(&claims.sub)?)
}

/// Requires an admin session. Rejects with 401 when the token is missing or
/// invalid, 403 when it names another user.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin = admin.username(), "handling request");
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AdminCapability);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        capability_from_parts(parts, state).map(RequireAdmin)
    }
}

/// Optional admin session. Never rejects; a missing or invalid token yields
/// `None`.
pub struct MaybeAdmin(pub Option<AdminCapability>);

impl MaybeAdmin {
    pub fn can_edit(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequestParts<AppState> for MaybeAdmin {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAdmin(capability_from_parts(parts, state).ok()))
    }
}
