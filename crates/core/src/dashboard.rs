//! Dashboard-level derivations over the full project list.
//!
//! Partitioning, filtering, and the category/status tallies shown above the
//! timeline. All functions take an explicit `today` so results are
//! reproducible.

use serde::Serialize;

use crate::error::CoreError;
use crate::project::{Project, ProjectCategory};
use crate::status::{classify, ProjectStatus, STATUS_DISPLAY_ORDER};
use crate::types::CalendarDate;

/// Filter value meaning "no restriction".
pub const FILTER_ALL: &str = "all";

// ---------------------------------------------------------------------------
// Partition
// ---------------------------------------------------------------------------

/// Split projects into `(timeline, pipeline)` preserving input order.
///
/// Pipeline projects have no stage date at all, regardless of the
/// discarded flag.
pub fn partition_pipeline(projects: &[Project]) -> (Vec<&Project>, Vec<&Project>) {
    projects.iter().partition(|p| !p.is_pipeline())
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Timeline filter selection. `None` fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub category: Option<ProjectCategory>,
    pub status: Option<ProjectStatus>,
    pub search: Option<String>,
}

impl ProjectFilter {
    /// Build a filter from raw query strings. `"all"` and blank values mean
    /// no restriction.
    pub fn from_query(
        category: Option<&str>,
        status: Option<&str>,
        search: Option<&str>,
    ) -> Result<Self, CoreError> {
        let category = match non_blank(category) {
            Some(FILTER_ALL) | None => None,
            Some(s) => Some(ProjectCategory::from_str_value(s)?),
        };
        let status = match non_blank(status) {
            Some(FILTER_ALL) | None => None,
            Some(s) => Some(ProjectStatus::from_str_value(s)?),
        };
        Ok(Self {
            category,
            status,
            search: non_blank(search).map(str::to_string),
        })
    }

    /// Apply category, then status, then case-insensitive name search.
    pub fn apply<'a>(&self, projects: &[&'a Project], today: CalendarDate) -> Vec<&'a Project> {
        let needle = self.search.as_deref().map(str::to_lowercase);
        projects
            .iter()
            .copied()
            .filter(|p| self.category.map_or(true, |c| p.category == c))
            .filter(|p| self.status.map_or(true, |s| classify(p, today) == s))
            .filter(|p| {
                needle
                    .as_deref()
                    .map_or(true, |n| p.name.to_lowercase().contains(n))
            })
            .collect()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Tallies
// ---------------------------------------------------------------------------

/// Project counts per category, over every project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub content: usize,
    pub vanilla: usize,
    pub enhancement: usize,
}

pub fn category_counts(projects: &[Project]) -> CategoryCounts {
    let mut counts = CategoryCounts {
        all: projects.len(),
        ..Default::default()
    };
    for project in projects {
        match project.category {
            ProjectCategory::Content => counts.content += 1,
            ProjectCategory::Vanilla => counts.vanilla += 1,
            ProjectCategory::Enhancement => counts.enhancement += 1,
        }
    }
    counts
}

/// One chip in the status summary strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub label: &'static str,
    pub count: usize,
}

/// Status tallies over non-discarded projects in display order. Statuses
/// with no projects are omitted.
pub fn status_summary(projects: &[Project], today: CalendarDate) -> Vec<StatusCount> {
    let statuses: Vec<ProjectStatus> = projects
        .iter()
        .filter(|p| !p.discarded)
        .map(|p| classify(p, today))
        .collect();

    STATUS_DISPLAY_ORDER
        .iter()
        .filter_map(|&status| {
            let count = statuses.iter().filter(|&&s| s == status).count();
            (count > 0).then(|| StatusCount {
                status,
                label: status.label(),
                count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{StageDate, StageDates};
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    fn d(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn project(name: &str, category: ProjectCategory, stages: StageDates) -> Project {
        let ts = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        Project {
            id: 0,
            name: name.to_string(),
            category,
            stages,
            discarded: false,
            jira_link: None,
            reason: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn in_requirement() -> StageDates {
        StageDates {
            requirement: StageDate::span(d("2026-01-01"), d("2026-01-31")),
            ..Default::default()
        }
    }

    fn completed() -> StageDates {
        StageDates {
            release: StageDate::span(d("2025-12-01"), d("2025-12-05")),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("Search Revamp", ProjectCategory::Content, in_requirement()),
            project("Billing", ProjectCategory::Vanilla, completed()),
            project("Dark mode", ProjectCategory::Enhancement, StageDates::default()),
            project("Search API", ProjectCategory::Vanilla, in_requirement()),
        ]
    }

    #[test]
    fn pipeline_partition_preserves_order() {
        let projects = sample();
        let (timeline, pipeline) = partition_pipeline(&projects);
        let names: Vec<&str> = timeline.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Search Revamp", "Billing", "Search API"]);
        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline[0].name, "Dark mode");
    }

    #[test]
    fn filters_apply_in_sequence() {
        let projects = sample();
        let (timeline, _) = partition_pipeline(&projects);
        let today = d("2026-01-10");

        let filter = ProjectFilter {
            category: Some(ProjectCategory::Vanilla),
            ..Default::default()
        };
        assert_eq!(filter.apply(&timeline, today).len(), 2);

        let filter = ProjectFilter {
            category: Some(ProjectCategory::Vanilla),
            status: Some(ProjectStatus::Requirement),
            ..Default::default()
        };
        let hits = filter.apply(&timeline, today);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Search API");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let projects = sample();
        let (timeline, _) = partition_pipeline(&projects);
        let filter = ProjectFilter {
            search: Some("SEARCH".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&timeline, d("2026-01-10")).len(), 2);
    }

    #[test]
    fn from_query_treats_all_and_blank_as_unset() {
        let filter = ProjectFilter::from_query(Some("all"), Some(""), Some("  ")).unwrap();
        assert_eq!(filter, ProjectFilter::default());

        let filter = ProjectFilter::from_query(Some("content"), Some("ready_for_qa"), None).unwrap();
        assert_eq!(filter.category, Some(ProjectCategory::Content));
        assert_eq!(filter.status, Some(ProjectStatus::ReadyForQa));
    }

    #[test]
    fn from_query_rejects_unknown_values() {
        assert_matches!(
            ProjectFilter::from_query(Some("marketing"), None, None),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            ProjectFilter::from_query(None, Some("blocked"), None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn category_counts_cover_every_project() {
        let counts = category_counts(&sample());
        assert_eq!(
            counts,
            CategoryCounts {
                all: 4,
                content: 1,
                vanilla: 2,
                enhancement: 1,
            }
        );
    }

    #[test]
    fn status_summary_skips_discarded_and_empty_statuses() {
        let mut projects = sample();
        let mut dropped = project("Dropped", ProjectCategory::Content, completed());
        dropped.discarded = true;
        projects.push(dropped);

        let summary = status_summary(&projects, d("2026-01-10"));
        let got: Vec<(ProjectStatus, usize)> =
            summary.iter().map(|s| (s.status, s.count)).collect();
        assert_eq!(
            got,
            [
                (ProjectStatus::Pipeline, 1),
                (ProjectStatus::Requirement, 2),
                (ProjectStatus::Completed, 1),
            ]
        );
        assert_eq!(summary[1].label, "Requirements");
    }
}
