//! Repository for the `projects` table.

use roadmap_core::project::{Project, StageDates};
use roadmap_core::types::DbId;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use crate::models::project::{CreateProject, ProjectRow, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, \
    requirement_start_date, requirement_end_date, \
    design_start_date, design_end_date, \
    development_start_date, development_end_date, \
    qa_start_date, qa_end_date, \
    release_start_date, release_end_date, \
    discarded, jira_link, reason, created_at, updated_at";

/// Bind the ten stage dates in column order.
fn bind_stages<'q>(
    query: QueryAs<'q, Postgres, ProjectRow, PgArguments>,
    stages: &StageDates,
) -> QueryAs<'q, Postgres, ProjectRow, PgArguments> {
    stages.iter().fold(query, |q, (_, dates)| {
        q.bind(dates.start_date).bind(dates.end_date)
    })
}

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row. An empty
    /// `jira_link` or `reason` is stored as `NULL`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, category, discarded, jira_link, reason,
                requirement_start_date, requirement_end_date,
                design_start_date, design_end_date,
                development_start_date, development_end_date,
                qa_start_date, qa_end_date,
                release_start_date, release_end_date)
             VALUES ($1, $2, $3, NULLIF($4, ''), NULLIF($5, ''),
                $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        let q = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.name)
            .bind(input.category.as_str())
            .bind(input.discarded)
            .bind(&input.jira_link)
            .bind(&input.reason);
        let row = bind_stages(q, &input.stages).fetch_one(pool).await?;
        Ok(row.into())
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Project::from))
    }

    /// List all projects ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY name, id");
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                discarded = COALESCE($4, discarded),
                jira_link = CASE WHEN $5::TEXT IS NULL THEN jira_link ELSE NULLIF($5, '') END,
                reason = CASE WHEN $6::TEXT IS NULL THEN reason ELSE NULLIF($6, '') END,
                requirement_start_date = CASE WHEN $7 THEN $8 ELSE requirement_start_date END,
                requirement_end_date = CASE WHEN $7 THEN $9 ELSE requirement_end_date END,
                design_start_date = CASE WHEN $7 THEN $10 ELSE design_start_date END,
                design_end_date = CASE WHEN $7 THEN $11 ELSE design_end_date END,
                development_start_date = CASE WHEN $7 THEN $12 ELSE development_start_date END,
                development_end_date = CASE WHEN $7 THEN $13 ELSE development_end_date END,
                qa_start_date = CASE WHEN $7 THEN $14 ELSE qa_start_date END,
                qa_end_date = CASE WHEN $7 THEN $15 ELSE qa_end_date END,
                release_start_date = CASE WHEN $7 THEN $16 ELSE release_start_date END,
                release_end_date = CASE WHEN $7 THEN $17 ELSE release_end_date END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let stages = input.stages.unwrap_or_default();
        let q = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.category.map(|c| c.as_str()))
            .bind(input.discarded)
            .bind(&input.jira_link)
            .bind(&input.reason)
            .bind(input.stages.is_some());
        let row = bind_stages(q, &stages).fetch_optional(pool).await?;
        Ok(row.map(Project::from))
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Accomplishments that referenced the project keep existing with a
    /// null `project_id`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
