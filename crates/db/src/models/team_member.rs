//! Team member entity model and DTOs.

use roadmap_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub role: String,
    /// Shared across teams rather than dedicated to this roadmap.
    pub is_shared_resource: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new team member.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMember {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub role: String,
    #[serde(default)]
    pub is_shared_resource: bool,
    /// Defaults to 0 if omitted.
    pub display_order: Option<i32>,
}

/// DTO for updating an existing team member. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMember {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub role: Option<String>,
    pub is_shared_resource: Option<bool>,
    pub display_order: Option<i32>,
}
