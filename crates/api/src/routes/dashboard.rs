use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET    /summary                           -> summary
/// GET    /timeline                          -> timeline
/// GET    /timeline/navigate                 -> navigate_period
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(dashboard::summary))
        .route("/timeline", get(dashboard::timeline))
        .route("/timeline/navigate", get(dashboard::navigate_period))
}
