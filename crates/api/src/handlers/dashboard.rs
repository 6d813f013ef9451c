//! Handlers for the dashboard read model: summary strip, timeline layout,
//! and period navigation.
//!
//! These endpoints are public. Each response carries `canEdit` so a client
//! can decide whether to show edit affordances without a second request.

use axum::extract::{Query, State};
use axum::Json;
use roadmap_core::dashboard::{
    category_counts, partition_pipeline, status_summary, CategoryCounts, ProjectFilter,
    StatusCount,
};
use roadmap_core::date_format::DateFormat;
use roadmap_core::project::Project;
use roadmap_core::settings::DashboardSettings;
use roadmap_core::timeline::{
    build_layout, compute_window, navigate, period_label, reset_to_today, NavDirection,
    TimelineLayout, TimelineWindow, ViewMode,
};
use roadmap_core::types::CalendarDate;
use roadmap_db::repositories::{ProjectRepo, RiskRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::handlers::project::ProjectView;
use crate::handlers::settings::effective_settings;
use crate::middleware::admin::MaybeAdmin;
use crate::query::{resolve_today, TodayParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query params for `GET /dashboard/timeline`.
#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    /// `weekly`, `monthly` (default) or `quarterly`.
    pub view: Option<String>,
    /// Period anchor; defaults to the period containing `today`.
    pub cursor: Option<CalendarDate>,
    pub today: Option<CalendarDate>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    /// `DD/MM/YYYY` (default), `MM/DD/YYYY` or `YYYY-MM-DD`.
    #[serde(rename = "dateFormat")]
    pub date_format: Option<String>,
}

/// Query params for `GET /dashboard/timeline/navigate`.
#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    pub view: Option<String>,
    pub cursor: Option<CalendarDate>,
    pub direction: NavDirection,
    pub today: Option<CalendarDate>,
}

fn resolve_view(view: Option<&str>) -> AppResult<ViewMode> {
    Ok(view
        .map(ViewMode::from_str_value)
        .transpose()?
        .unwrap_or_default())
}

fn resolve_date_format(format: Option<&str>) -> AppResult<DateFormat> {
    Ok(format
        .map(DateFormat::from_str_value)
        .transpose()?
        .unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Everything above the timeline.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub today: CalendarDate,
    pub can_edit: bool,
    pub category_counts: CategoryCounts,
    pub status_summary: Vec<StatusCount>,
    pub active_risks: usize,
    /// Projects with no stage dates, in name order.
    pub pipeline: Vec<ProjectView>,
    pub settings: DashboardSettings,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    pub can_edit: bool,
    #[serde(flatten)]
    pub layout: TimelineLayout,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateResponse {
    pub view: ViewMode,
    pub cursor: CalendarDate,
    pub period_label: String,
    pub window: TimelineWindow,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard/summary
pub async fn summary(
    admin: MaybeAdmin,
    State(state): State<AppState>,
    Query(params): Query<TodayParams>,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let today = params.resolve();
    let projects = ProjectRepo::list(&state.pool).await?;
    let active_risks = RiskRepo::list(&state.pool).await?.len();
    let settings = effective_settings(&state.pool).await?;

    let (_, pipeline) = partition_pipeline(&projects);
    let pipeline = pipeline
        .into_iter()
        .cloned()
        .map(|p| ProjectView::new(p, today))
        .collect();

    Ok(Json(DataResponse {
        data: DashboardSummary {
            today,
            can_edit: admin.can_edit(),
            category_counts: category_counts(&projects),
            status_summary: status_summary(&projects, today),
            active_risks,
            pipeline,
            settings,
        },
    }))
}

/// GET /api/v1/dashboard/timeline
///
/// Lays out every scheduled project that passes the filters. Pipeline
/// projects never appear on the timeline.
pub async fn timeline(
    admin: MaybeAdmin,
    State(state): State<AppState>,
    Query(params): Query<TimelineQuery>,
) -> AppResult<Json<DataResponse<TimelineResponse>>> {
    let view = resolve_view(params.view.as_deref())?;
    let date_format = resolve_date_format(params.date_format.as_deref())?;
    let today = resolve_today(params.today);
    let cursor = params.cursor.unwrap_or_else(|| reset_to_today(view, today));
    let filter = ProjectFilter::from_query(
        params.category.as_deref(),
        params.status.as_deref(),
        params.search.as_deref(),
    )?;

    let projects = ProjectRepo::list(&state.pool).await?;
    let (scheduled, _) = partition_pipeline(&projects);
    let visible: Vec<Project> = filter.apply(&scheduled, today).into_iter().cloned().collect();

    let layout = build_layout(&visible, view, cursor, today, date_format);
    tracing::debug!(
        view = view.as_str(),
        %cursor,
        rows = layout.rows.len(),
        "Timeline laid out"
    );

    Ok(Json(DataResponse {
        data: TimelineResponse {
            can_edit: admin.can_edit(),
            layout,
        },
    }))
}

/// GET /api/v1/dashboard/timeline/navigate
///
/// Move the period cursor. Weekly view does not navigate; `previous` and
/// `next` return the cursor unchanged.
pub async fn navigate_period(
    Query(params): Query<NavigateQuery>,
) -> AppResult<Json<DataResponse<NavigateResponse>>> {
    let view = resolve_view(params.view.as_deref())?;
    let today = resolve_today(params.today);
    let cursor = params.cursor.unwrap_or_else(|| reset_to_today(view, today));
    let cursor = navigate(view, cursor, params.direction, today);

    Ok(Json(DataResponse {
        data: NavigateResponse {
            view,
            cursor,
            period_label: period_label(view, cursor),
            window: compute_window(view, cursor),
        },
    }))
}
