//! Dashboard toggle model and DTO.
//!
//! Maps to the `dashboard_settings` table. Only keys an admin has changed
//! are stored; defaults live in `roadmap_core::settings`.

use roadmap_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `dashboard_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSetting {
    pub id: DbId,
    pub setting_key: String,
    pub setting_value: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for setting a single toggle.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertDashboardSetting {
    pub value: bool,
}
