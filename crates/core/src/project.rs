//! Project domain types: lifecycle stages, categories, and stage date ranges.
//!
//! These are the shapes the status classifier and timeline engine consume.
//! The `db` crate maps its flat row columns into [`Project`]; nothing in
//! this module touches storage.

use serde::{Deserialize, Serialize};
use validator::ValidateUrl;

use crate::error::CoreError;
use crate::types::{CalendarDate, DbId, Timestamp};

// ---------------------------------------------------------------------------
// Lifecycle stages
// ---------------------------------------------------------------------------

/// One of the five fixed lifecycle stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    Requirement,
    Design,
    Development,
    Qa,
    Release,
}

/// The fixed stage sequence. Classification and layout both rely on this
/// ordering; reverse scans iterate it with `.iter().rev()`.
pub const STAGE_ORDER: [LifecycleStage; 5] = [
    LifecycleStage::Requirement,
    LifecycleStage::Design,
    LifecycleStage::Development,
    LifecycleStage::Qa,
    LifecycleStage::Release,
];

impl LifecycleStage {
    /// Storage/wire key, also the column prefix in the `projects` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requirement => "requirement",
            Self::Design => "design",
            Self::Development => "development",
            Self::Qa => "qa",
            Self::Release => "release",
        }
    }

    /// Human-readable stage name used in legends and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Requirement => "Requirement Gathering",
            Self::Design => "Design",
            Self::Development => "Development",
            Self::Qa => "QA",
            Self::Release => "Release",
        }
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub const CATEGORY_CONTENT: &str = "content";
pub const CATEGORY_VANILLA: &str = "vanilla";
pub const CATEGORY_ENHANCEMENT: &str = "enhancement";

/// All valid category strings.
pub const VALID_CATEGORIES: &[&str] = &[CATEGORY_CONTENT, CATEGORY_VANILLA, CATEGORY_ENHANCEMENT];

/// Which team or track a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    Content,
    Vanilla,
    Enhancement,
}

/// Every category, in display order.
pub const ALL_CATEGORIES: [ProjectCategory; 3] = [
    ProjectCategory::Content,
    ProjectCategory::Vanilla,
    ProjectCategory::Enhancement,
];

impl ProjectCategory {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            CATEGORY_CONTENT => Ok(Self::Content),
            CATEGORY_VANILLA => Ok(Self::Vanilla),
            CATEGORY_ENHANCEMENT => Ok(Self::Enhancement),
            _ => Err(CoreError::Validation(format!(
                "Invalid category '{s}'. Must be one of: {}",
                VALID_CATEGORIES.join(", ")
            ))),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => CATEGORY_CONTENT,
            Self::Vanilla => CATEGORY_VANILLA,
            Self::Enhancement => CATEGORY_ENHANCEMENT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Content => "Content Team Requirements",
            Self::Vanilla => "Vanilla Build",
            Self::Enhancement => "Enhancements",
        }
    }

    /// Three-letter badge shown next to project names (`CON`, `VAN`, `ENH`).
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Content => "CON",
            Self::Vanilla => "VAN",
            Self::Enhancement => "ENH",
        }
    }
}

impl TryFrom<String> for ProjectCategory {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

// ---------------------------------------------------------------------------
// Stage dates
// ---------------------------------------------------------------------------

/// Start/end pair for a single stage. Either side may be unset.
///
/// `start_date <= end_date` is assumed when both are present but never
/// enforced here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageDate {
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
}

impl StageDate {
    pub fn new(start_date: Option<CalendarDate>, end_date: Option<CalendarDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// A stage with both dates set.
    pub fn span(start: CalendarDate, end: CalendarDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

/// The five stage date pairs of a project. Every key is always present
/// when serialized; missing keys deserialize as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageDates {
    pub requirement: StageDate,
    pub design: StageDate,
    pub development: StageDate,
    pub qa: StageDate,
    pub release: StageDate,
}

impl StageDates {
    pub fn get(&self, stage: LifecycleStage) -> &StageDate {
        match stage {
            LifecycleStage::Requirement => &self.requirement,
            LifecycleStage::Design => &self.design,
            LifecycleStage::Development => &self.development,
            LifecycleStage::Qa => &self.qa,
            LifecycleStage::Release => &self.release,
        }
    }

    /// `(stage, dates)` pairs in [`STAGE_ORDER`].
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (LifecycleStage, &StageDate)> + '_ {
        STAGE_ORDER.iter().map(move |&stage| (stage, self.get(stage)))
    }

    /// `true` if any stage has a start or end date.
    pub fn has_any_date(&self) -> bool {
        self.iter().any(|(_, d)| !d.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A tracked unit of work as seen by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub category: ProjectCategory,
    pub stages: StageDates,
    pub discarded: bool,
    pub jira_link: Option<String>,
    pub reason: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Projects without a single stage date belong in the pipeline list.
    pub fn is_pipeline(&self) -> bool {
        !self.stages.has_any_date()
    }
}

/// Maximum length of a project name.
pub const MAX_PROJECT_NAME_LEN: usize = 200;

/// Validate a project name: non-blank and at most [`MAX_PROJECT_NAME_LEN`] chars.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Project name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_PROJECT_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Project name must be at most {MAX_PROJECT_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// A Jira link must be an absolute URL. Empty strings are accepted and mean
/// "no link".
pub fn validate_jira_link(link: &str) -> Result<(), CoreError> {
    if link.is_empty() || link.validate_url() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Jira link '{link}' is not a valid URL"
        )))
    }
}
