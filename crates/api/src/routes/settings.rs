use axum::routing::{get, put};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET    /                                  -> get (effective toggles)
/// PUT    /{key}                             -> update (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(settings::get))
        .route("/{key}", put(settings::update))
}
