//! Handlers for the `/risks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roadmap_core::error::CoreError;
use roadmap_core::risk::sort_by_severity;
use roadmap_core::types::DbId;
use roadmap_db::models::risk::{CreateRisk, Risk, UpdateRisk};
use roadmap_db::repositories::RiskRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Risk", id })
}

/// GET /api/v1/risks
///
/// Most severe first; newest first within a severity.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Risk>>>> {
    let mut risks = RiskRepo::list(&state.pool).await?;
    sort_by_severity(&mut risks, |r| r.severity);
    Ok(Json(DataResponse { data: risks }))
}

/// POST /api/v1/risks
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateRisk>,
) -> AppResult<(StatusCode, Json<DataResponse<Risk>>)> {
    input.validate()?;
    let risk = RiskRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = risk.id,
        severity = risk.severity.as_str(),
        admin = admin.username(),
        "Risk created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: risk })))
}

/// PUT /api/v1/risks/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRisk>,
) -> AppResult<Json<DataResponse<Risk>>> {
    input.validate()?;
    let risk = RiskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: risk }))
}

/// DELETE /api/v1/risks/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if RiskRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
