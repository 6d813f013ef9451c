//! Repository for the `dashboard_settings` table.

use sqlx::PgPool;

use crate::models::dashboard_setting::DashboardSetting;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, setting_key, setting_value, created_at, updated_at";

/// Provides read and upsert operations for dashboard toggles.
pub struct DashboardSettingRepo;

impl DashboardSettingRepo {
    /// List every stored toggle ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<DashboardSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dashboard_settings ORDER BY setting_key");
        sqlx::query_as::<_, DashboardSetting>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert or update the toggle for `key`.
    ///
    /// Uses `ON CONFLICT (setting_key) DO UPDATE` to guarantee one row per key.
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        value: bool,
    ) -> Result<DashboardSetting, sqlx::Error> {
        let query = format!(
            "INSERT INTO dashboard_settings (setting_key, setting_value)
             VALUES ($1, $2)
             ON CONFLICT (setting_key) DO UPDATE SET setting_value = EXCLUDED.setting_value
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DashboardSetting>(&query)
            .bind(key)
            .bind(value)
            .fetch_one(pool)
            .await
    }
}
