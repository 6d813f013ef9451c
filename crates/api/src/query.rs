//! Shared query parameter types for API handlers.

use roadmap_core::types::CalendarDate;
use serde::Deserialize;

/// `?today=YYYY-MM-DD` override for the reference date.
///
/// Status is always derived against a "today". Handlers default to the
/// server's current UTC date; the override makes responses reproducible.
#[derive(Debug, Default, Deserialize)]
pub struct TodayParams {
    pub today: Option<CalendarDate>,
}

impl TodayParams {
    pub fn resolve(&self) -> CalendarDate {
        resolve_today(self.today)
    }
}

/// The given date, or the current UTC date.
pub fn resolve_today(today: Option<CalendarDate>) -> CalendarDate {
    today.unwrap_or_else(|| chrono::Utc::now().date_naive())
}
