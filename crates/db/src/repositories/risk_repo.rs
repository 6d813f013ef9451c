//! Repository for the `risks` table.

use roadmap_core::types::DbId;
use sqlx::PgPool;

use crate::models::risk::{CreateRisk, Risk, UpdateRisk};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, text, severity, created_at, updated_at";

/// Provides CRUD operations for risks.
pub struct RiskRepo;

impl RiskRepo {
    /// Insert a new risk, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRisk) -> Result<Risk, sqlx::Error> {
        let query = format!(
            "INSERT INTO risks (text, severity)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Risk>(&query)
            .bind(&input.text)
            .bind(input.severity.as_str())
            .fetch_one(pool)
            .await
    }

    /// List all risks, most recently created first.
    ///
    /// Severity ordering is a presentation concern applied by the caller.
    pub async fn list(pool: &PgPool) -> Result<Vec<Risk>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM risks ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Risk>(&query).fetch_all(pool).await
    }

    /// Update a risk. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRisk,
    ) -> Result<Option<Risk>, sqlx::Error> {
        let query = format!(
            "UPDATE risks SET
                text = COALESCE($2, text),
                severity = COALESCE($3, severity)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Risk>(&query)
            .bind(id)
            .bind(&input.text)
            .bind(input.severity.map(|s| s.as_str()))
            .fetch_optional(pool)
            .await
    }

    /// Delete a risk by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM risks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
