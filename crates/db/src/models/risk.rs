//! Risk entity model and DTOs.

use roadmap_core::risk::RiskSeverity;
use roadmap_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `risks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub id: DbId,
    pub text: String,
    #[sqlx(try_from = "String")]
    pub severity: RiskSeverity,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new risk.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRisk {
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
    /// Defaults to `medium` if omitted.
    #[serde(default)]
    pub severity: RiskSeverity,
}

/// DTO for updating an existing risk. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRisk {
    #[validate(length(min = 1, max = 2000))]
    pub text: Option<String>,
    pub severity: Option<RiskSeverity>,
}
