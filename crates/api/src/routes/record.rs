//! Routes for the simple dashboard records: risks, accomplishments, and
//! team members. All three share the same list/create/update/delete shape.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{accomplishment, risk, team_member};
use crate::state::AppState;

/// Routes mounted at `/risks`.
///
/// ```text
/// GET    /                                  -> list (most severe first)
/// POST   /                                  -> create (admin)
/// PUT    /{id}                              -> update (admin)
/// DELETE /{id}                              -> delete (admin)
/// ```
pub fn risk_router() -> Router<AppState> {
    Router::new()
        .route("/", get(risk::list).post(risk::create))
        .route("/{id}", put(risk::update).delete(risk::delete))
}

/// Routes mounted at `/accomplishments`.
pub fn accomplishment_router() -> Router<AppState> {
    Router::new()
        .route("/", get(accomplishment::list).post(accomplishment::create))
        .route(
            "/{id}",
            put(accomplishment::update).delete(accomplishment::delete),
        )
}

/// Routes mounted at `/team-members`.
pub fn team_member_router() -> Router<AppState> {
    Router::new()
        .route("/", get(team_member::list).post(team_member::create))
        .route("/{id}", put(team_member::update).delete(team_member::delete))
}
