//! Project entity model and DTOs.
//!
//! The `projects` table stores each stage as a flat
//! `<stage>_start_date` / `<stage>_end_date` column pair. [`ProjectRow`]
//! mirrors that layout and converts into the nested core
//! [`Project`](roadmap_core::project::Project) used everywhere else.

use roadmap_core::project::{Project, ProjectCategory, StageDate, StageDates};
use roadmap_core::types::{CalendarDate, DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub category: ProjectCategory,
    pub requirement_start_date: Option<CalendarDate>,
    pub requirement_end_date: Option<CalendarDate>,
    pub design_start_date: Option<CalendarDate>,
    pub design_end_date: Option<CalendarDate>,
    pub development_start_date: Option<CalendarDate>,
    pub development_end_date: Option<CalendarDate>,
    pub qa_start_date: Option<CalendarDate>,
    pub qa_end_date: Option<CalendarDate>,
    pub release_start_date: Option<CalendarDate>,
    pub release_end_date: Option<CalendarDate>,
    pub discarded: bool,
    pub jira_link: Option<String>,
    pub reason: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            category: row.category,
            stages: StageDates {
                requirement: StageDate::new(row.requirement_start_date, row.requirement_end_date),
                design: StageDate::new(row.design_start_date, row.design_end_date),
                development: StageDate::new(row.development_start_date, row.development_end_date),
                qa: StageDate::new(row.qa_start_date, row.qa_end_date),
                release: StageDate::new(row.release_start_date, row.release_end_date),
            },
            discarded: row.discarded,
            jira_link: row.jira_link,
            reason: row.reason,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub category: ProjectCategory,
    /// Omitted stages are left unscheduled.
    #[serde(default)]
    pub stages: StageDates,
    #[serde(default)]
    pub discarded: bool,
    /// An empty string is stored as no link.
    pub jira_link: Option<String>,
    pub reason: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// `stages`, when present, replaces all ten stage dates at once so that
/// individual dates can be cleared. An empty `jiraLink` or `reason` clears
/// the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub category: Option<ProjectCategory>,
    pub stages: Option<StageDates>,
    pub discarded: Option<bool>,
    pub jira_link: Option<String>,
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_accepts_nested_stages() {
        let json = serde_json::json!({
            "name": "Checkout",
            "category": "vanilla",
            "stages": {
                "requirement": { "startDate": "2026-01-01", "endDate": "2026-01-10" },
                "design": { "startDate": null, "endDate": null },
                "development": { "startDate": null, "endDate": null },
                "qa": { "startDate": null, "endDate": null },
                "release": { "startDate": null, "endDate": null }
            },
            "jiraLink": "https://jira.example.com/browse/CLMS-1"
        });
        let dto: CreateProject = serde_json::from_value(json).unwrap();
        assert_eq!(dto.category, ProjectCategory::Vanilla);
        assert!(!dto.discarded);
        assert!(dto.stages.requirement.end_date.is_some());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn create_dto_rejects_empty_name_but_not_empty_link() {
        let mut dto = CreateProject {
            name: String::new(),
            category: ProjectCategory::Content,
            stages: StageDates::default(),
            discarded: false,
            jira_link: Some(String::new()),
            reason: None,
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(!fields.contains_key("jira_link"));

        dto.name = "Checkout".to_string();
        assert!(dto.validate().is_ok());
    }
}
