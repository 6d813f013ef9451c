//! Handlers for the `/projects` resource.
//!
//! Every project returned here carries its derived status, computed against
//! `?today=` or the server's current date.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use roadmap_core::error::CoreError;
use roadmap_core::project::{validate_jira_link, validate_project_name, Project};
use roadmap_core::status::{classify, ProjectStatus};
use roadmap_core::types::{CalendarDate, DbId};
use roadmap_db::models::project::{CreateProject, UpdateProject};
use roadmap_db::repositories::ProjectRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::query::TodayParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// A project plus its derived status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub status: ProjectStatus,
    pub status_label: &'static str,
}

impl ProjectView {
    pub fn new(project: Project, today: CalendarDate) -> Self {
        let status = classify(&project, today);
        Self {
            project,
            status,
            status_label: status.label(),
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TodayParams>,
) -> AppResult<Json<DataResponse<Vec<ProjectView>>>> {
    let today = params.resolve();
    let projects = ProjectRepo::list(&state.pool).await?;
    let data = projects
        .into_iter()
        .map(|p| ProjectView::new(p, today))
        .collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<TodayParams>,
) -> AppResult<Json<DataResponse<ProjectView>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: ProjectView::new(project, params.resolve()),
    }))
}

/// POST /api/v1/projects
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectView>>)> {
    input.validate()?;
    validate_project_name(&input.name)?;
    if let Some(link) = &input.jira_link {
        validate_jira_link(link)?;
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = project.id, admin = admin.username(), "Project created");

    let today = TodayParams::default().resolve();
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ProjectView::new(project, today),
        }),
    ))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<ProjectView>>> {
    input.validate()?;
    if let Some(name) = &input.name {
        validate_project_name(name)?;
    }
    if let Some(link) = &input.jira_link {
        validate_jira_link(link)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, admin = admin.username(), "Project updated");

    let today = TodayParams::default().resolve();
    Ok(Json(DataResponse {
        data: ProjectView::new(project, today),
    }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, admin = admin.username(), "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
