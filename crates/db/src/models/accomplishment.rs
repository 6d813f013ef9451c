//! Accomplishment entity model and DTOs.

use roadmap_core::types::{CalendarDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `accomplishments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Accomplishment {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed_at: CalendarDate,
    /// Project this accomplishment belongs to, if any.
    pub project_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new accomplishment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccomplishment {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to today (database clock) if omitted.
    pub completed_at: Option<CalendarDate>,
    pub project_id: Option<DbId>,
}

/// DTO for updating an existing accomplishment. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccomplishment {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed_at: Option<CalendarDate>,
    pub project_id: Option<DbId>,
}
