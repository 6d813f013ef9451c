//! Repository for the `accomplishments` table.

use roadmap_core::types::DbId;
use sqlx::PgPool;

use crate::models::accomplishment::{
    Accomplishment, CreateAccomplishment, UpdateAccomplishment,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed_at, project_id, created_at, updated_at";

/// Provides CRUD operations for accomplishments.
pub struct AccomplishmentRepo;

impl AccomplishmentRepo {
    /// Insert a new accomplishment, returning the created row.
    ///
    /// If `completed_at` is `None` in the input, defaults to the current date.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAccomplishment,
    ) -> Result<Accomplishment, sqlx::Error> {
        let query = format!(
            "INSERT INTO accomplishments (title, description, completed_at, project_id)
             VALUES ($1, $2, COALESCE($3, CURRENT_DATE), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Accomplishment>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.completed_at)
            .bind(input.project_id)
            .fetch_one(pool)
            .await
    }

    /// List all accomplishments, most recently completed first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Accomplishment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM accomplishments ORDER BY completed_at DESC, id DESC"
        );
        sqlx::query_as::<_, Accomplishment>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an accomplishment. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAccomplishment,
    ) -> Result<Option<Accomplishment>, sqlx::Error> {
        let query = format!(
            "UPDATE accomplishments SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                completed_at = COALESCE($4, completed_at),
                project_id = COALESCE($5, project_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Accomplishment>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.completed_at)
            .bind(input.project_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an accomplishment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accomplishments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
