//! Handlers for the `/accomplishments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roadmap_core::error::CoreError;
use roadmap_core::types::DbId;
use roadmap_db::models::accomplishment::{
    Accomplishment, CreateAccomplishment, UpdateAccomplishment,
};
use roadmap_db::repositories::AccomplishmentRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Accomplishment",
        id,
    })
}

/// GET /api/v1/accomplishments
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Accomplishment>>>> {
    let items = AccomplishmentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/accomplishments
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAccomplishment>,
) -> AppResult<(StatusCode, Json<DataResponse<Accomplishment>>)> {
    input.validate()?;
    let item = AccomplishmentRepo::create(&state.pool, &input).await?;
    tracing::info!(id = item.id, admin = admin.username(), "Accomplishment created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/accomplishments/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAccomplishment>,
) -> AppResult<Json<DataResponse<Accomplishment>>> {
    input.validate()?;
    let item = AccomplishmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/accomplishments/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if AccomplishmentRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
