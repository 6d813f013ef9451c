//! Handlers for the `/team-members` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roadmap_core::error::CoreError;
use roadmap_core::types::DbId;
use roadmap_db::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};
use roadmap_db::repositories::TeamMemberRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "TeamMember",
        id,
    })
}

/// GET /api/v1/team-members
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<TeamMember>>>> {
    let members = TeamMemberRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: members }))
}

/// POST /api/v1/team-members
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTeamMember>,
) -> AppResult<(StatusCode, Json<DataResponse<TeamMember>>)> {
    input.validate()?;
    let member = TeamMemberRepo::create(&state.pool, &input).await?;
    tracing::info!(id = member.id, admin = admin.username(), "Team member created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// PUT /api/v1/team-members/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeamMember>,
) -> AppResult<Json<DataResponse<TeamMember>>> {
    input.validate()?;
    let member = TeamMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/v1/team-members/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TeamMemberRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
