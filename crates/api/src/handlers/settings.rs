//! Handlers for the `/settings` resource (dashboard section toggles).

use axum::extract::{Path, State};
use axum::Json;
use roadmap_core::settings::{validate_setting_key, DashboardSettings};
use roadmap_db::models::dashboard_setting::UpsertDashboardSetting;
use roadmap_db::repositories::DashboardSettingRepo;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load stored toggles and layer them over the defaults.
pub async fn effective_settings(pool: &PgPool) -> Result<DashboardSettings, sqlx::Error> {
    let stored = DashboardSettingRepo::list(pool).await?;
    Ok(DashboardSettings::from_stored(
        stored.into_iter().map(|s| (s.setting_key, s.setting_value)),
    ))
}

/// GET /api/v1/settings
pub async fn get(State(state): State<AppState>) -> AppResult<Json<DataResponse<DashboardSettings>>> {
    let settings = effective_settings(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/settings/{key}
///
/// Returns the full effective settings after the change.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<UpsertDashboardSetting>,
) -> AppResult<Json<DataResponse<DashboardSettings>>> {
    validate_setting_key(&key)?;
    DashboardSettingRepo::upsert(&state.pool, &key, input.value).await?;
    tracing::info!(
        key = %key,
        value = input.value,
        admin = admin.username(),
        "Dashboard setting updated"
    );

    let settings = effective_settings(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}
