//! Derived project status.
//!
//! A project's status is never stored. It is recomputed from the stage
//! dates and a caller-supplied `today` every time it is needed, so it cannot
//! go stale as the calendar moves.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::project::{LifecycleStage, Project, STAGE_ORDER};
use crate::types::CalendarDate;

// ---------------------------------------------------------------------------
// Status enum
// ---------------------------------------------------------------------------

/// One of the nine display statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Pipeline,
    Requirement,
    Design,
    Development,
    Qa,
    Release,
    ReadyForDev,
    ReadyForQa,
    Completed,
}

/// Status display order used by the summary strip and the status filter.
pub const STATUS_DISPLAY_ORDER: [ProjectStatus; 9] = [
    ProjectStatus::Pipeline,
    ProjectStatus::Requirement,
    ProjectStatus::Design,
    ProjectStatus::ReadyForDev,
    ProjectStatus::Development,
    ProjectStatus::ReadyForQa,
    ProjectStatus::Qa,
    ProjectStatus::Release,
    ProjectStatus::Completed,
];

impl ProjectStatus {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        STATUS_DISPLAY_ORDER
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = STATUS_DISPLAY_ORDER.iter().map(|st| st.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pipeline => "pipeline",
            Self::Requirement => "requirement",
            Self::Design => "design",
            Self::Development => "development",
            Self::Qa => "qa",
            Self::Release => "release",
            Self::ReadyForDev => "ready_for_dev",
            Self::ReadyForQa => "ready_for_qa",
            Self::Completed => "completed",
        }
    }

    /// Short label for summary chips and filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pipeline => "Pipeline",
            Self::Requirement => "Requirements",
            Self::Design => "Design",
            Self::Development => "Development",
            Self::Qa => "QA",
            Self::Release => "Release",
            Self::ReadyForDev => "Ready for Dev",
            Self::ReadyForQa => "Ready for QA",
            Self::Completed => "Completed",
        }
    }
}

impl From<LifecycleStage> for ProjectStatus {
    fn from(stage: LifecycleStage) -> Self {
        match stage {
            LifecycleStage::Requirement => Self::Requirement,
            LifecycleStage::Design => Self::Design,
            LifecycleStage::Development => Self::Development,
            LifecycleStage::Qa => Self::Qa,
            LifecycleStage::Release => Self::Release,
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Derive the display status of `project` as of `today`.
///
/// Rules are evaluated in a fixed precedence order and the first match wins:
///
/// 1. discarded: latest stage (closest to release) that has a start date,
///    else pipeline
/// 2. no dates at all: pipeline
/// 3. release ended on or before today: completed
/// 4. design ended and development not started: ready for dev
/// 5. development ended before today and QA not started: ready for QA
/// 6. latest stage with `start <= today` that is open-ended or has
///    `end >= today`
/// 7. earliest stage with a start date
/// 8. pipeline
///
/// Rule 4 runs before the active-stage scan, so it wins even when an earlier
/// stage's range contains `today`.
pub fn classify(project: &Project, today: CalendarDate) -> ProjectStatus {
    let stages = &project.stages;

    if project.discarded {
        return STAGE_ORDER
            .iter()
            .rev()
            .find(|&&stage| stages.get(stage).start_date.is_some())
            .map_or(ProjectStatus::Pipeline, |&stage| stage.into());
    }

    if !stages.has_any_date() {
        return ProjectStatus::Pipeline;
    }

    if matches!(stages.release.end_date, Some(end) if end <= today) {
        return ProjectStatus::Completed;
    }

    if stages.design.end_date.is_some() && stages.development.start_date.is_none() {
        return ProjectStatus::ReadyForDev;
    }

    if let Some(dev_end) = stages.development.end_date {
        if stages.qa.start_date.is_none() && dev_end < today {
            return ProjectStatus::ReadyForQa;
        }
    }

    for &stage in STAGE_ORDER.iter().rev() {
        let dates = stages.get(stage);
        let Some(start) = dates.start_date else {
            continue;
        };
        if start > today {
            continue;
        }
        match dates.end_date {
            None => return stage.into(),
            Some(end) if end >= today => return stage.into(),
            Some(_) => {}
        }
    }

    STAGE_ORDER
        .iter()
        .find(|&&stage| stages.get(stage).start_date.is_some())
        .map_or(ProjectStatus::Pipeline, |&stage| stage.into())
}
