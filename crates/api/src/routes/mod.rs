pub mod auth;
pub mod dashboard;
pub mod health;
pub mod project;
pub mod record;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
///
/// /risks                                           list, create
/// /risks/{id}                                      update, delete
/// /accomplishments                                 list, create
/// /accomplishments/{id}                            update, delete
/// /team-members                                    list, create
/// /team-members/{id}                               update, delete
///
/// /settings                                        effective toggles
/// /settings/{key}                                  upsert toggle
///
/// /dashboard/summary                               counts, status strip, pipeline
/// /dashboard/timeline                              full timeline layout
/// /dashboard/timeline/navigate                     move the period cursor
/// ```
///
/// Reads are public. Every write requires an admin session token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/risks", record::risk_router())
        .nest("/accomplishments", record::accomplishment_router())
        .nest("/team-members", record::team_member_router())
        .nest("/settings", settings::router())
        .nest("/dashboard", dashboard::router())
}
