//! Timeline window, column, and geometry computation.
//!
//! Everything here is a pure function of `(view mode, period cursor, today,
//! projects)`. The period cursor is owned by the caller and advanced with
//! [`previous`], [`next`], and [`reset_to_today`]; nothing is cached between
//! calls.
//!
//! Geometry is derived in two steps: every column has a fixed width for the
//! view mode, and the per-day density is back-computed from the total width
//! and the number of days in the window. A 28-day month therefore has a
//! slightly different `pixels_per_day` than a 31-day month, but columns are
//! always the same width.

use chrono::{Datelike, Duration, Months, Weekday};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::date_format::DateFormat;
use crate::error::CoreError;
use crate::project::{LifecycleStage, Project, ProjectCategory, STAGE_ORDER};
use crate::status::{classify, ProjectStatus};
use crate::types::{CalendarDate, DbId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Width of one day column (weekly and monthly views).
pub const DAY_COLUMN_WIDTH: f64 = 40.0;

/// Width of one month column (quarterly view).
pub const MONTH_COLUMN_WIDTH: f64 = 150.0;

/// Narrowest stage bar ever emitted, so single-day stages stay clickable.
pub const MIN_STAGE_WIDTH: f64 = 8.0;

pub const VIEW_WEEKLY: &str = "weekly";
pub const VIEW_MONTHLY: &str = "monthly";
pub const VIEW_QUARTERLY: &str = "quarterly";

/// All valid view mode strings.
pub const VALID_VIEW_MODES: &[&str] = &[VIEW_WEEKLY, VIEW_MONTHLY, VIEW_QUARTERLY];

// ---------------------------------------------------------------------------
// View mode
// ---------------------------------------------------------------------------

/// Timeline zoom level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
}

impl ViewMode {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            VIEW_WEEKLY => Ok(Self::Weekly),
            VIEW_MONTHLY => Ok(Self::Monthly),
            VIEW_QUARTERLY => Ok(Self::Quarterly),
            _ => Err(CoreError::Validation(format!(
                "Invalid view mode '{s}'. Must be one of: {}",
                VALID_VIEW_MODES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => VIEW_WEEKLY,
            Self::Monthly => VIEW_MONTHLY,
            Self::Quarterly => VIEW_QUARTERLY,
        }
    }

    /// Fixed pixel width of one column in this view.
    pub fn column_width(&self) -> f64 {
        match self {
            Self::Weekly | Self::Monthly => DAY_COLUMN_WIDTH,
            Self::Quarterly => MONTH_COLUMN_WIDTH,
        }
    }

    /// Whether this view renders one column per day.
    pub fn has_day_columns(&self) -> bool {
        !matches!(self, Self::Quarterly)
    }
}

// ---------------------------------------------------------------------------
// Calendar helpers
// ---------------------------------------------------------------------------

pub fn start_of_month(date: CalendarDate) -> CalendarDate {
    date - Duration::days(i64::from(date.day0()))
}

pub fn end_of_month(date: CalendarDate) -> CalendarDate {
    start_of_month(date) + Months::new(1) - Duration::days(1)
}

pub fn start_of_quarter(date: CalendarDate) -> CalendarDate {
    start_of_month(date) - Months::new(date.month0() % 3)
}

pub fn end_of_quarter(date: CalendarDate) -> CalendarDate {
    start_of_quarter(date) + Months::new(3) - Duration::days(1)
}

/// Monday on or before `date`.
pub fn start_of_week(date: CalendarDate) -> CalendarDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Sunday on or after `date`.
pub fn end_of_week(date: CalendarDate) -> CalendarDate {
    start_of_week(date) + Duration::days(6)
}

/// 1-based quarter number of `date`.
pub fn quarter_of(date: CalendarDate) -> u32 {
    date.month0() / 3 + 1
}

fn is_weekend(date: CalendarDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

// ---------------------------------------------------------------------------
// Period navigation
// ---------------------------------------------------------------------------

/// Move the cursor back one period. Weekly view does not navigate.
///
/// The result is always normalized to the start of its period.
pub fn previous(view: ViewMode, cursor: CalendarDate) -> CalendarDate {
    match view {
        ViewMode::Monthly => start_of_month(cursor) - Months::new(1),
        ViewMode::Quarterly => start_of_quarter(cursor) - Months::new(3),
        ViewMode::Weekly => cursor,
    }
}

/// Move the cursor forward one period. Weekly view does not navigate.
pub fn next(view: ViewMode, cursor: CalendarDate) -> CalendarDate {
    match view {
        ViewMode::Monthly => start_of_month(cursor) + Months::new(1),
        ViewMode::Quarterly => start_of_quarter(cursor) + Months::new(3),
        ViewMode::Weekly => cursor,
    }
}

/// The cursor for the period containing `today`. Also the initial cursor
/// when a view is first shown.
pub fn reset_to_today(view: ViewMode, today: CalendarDate) -> CalendarDate {
    match view {
        ViewMode::Monthly | ViewMode::Weekly => start_of_month(today),
        ViewMode::Quarterly => start_of_quarter(today),
    }
}

/// Navigation request from a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavDirection {
    Previous,
    Next,
    Today,
}

/// Apply a [`NavDirection`] to the cursor.
pub fn navigate(
    view: ViewMode,
    cursor: CalendarDate,
    direction: NavDirection,
    today: CalendarDate,
) -> CalendarDate {
    match direction {
        NavDirection::Previous => previous(view, cursor),
        NavDirection::Next => next(view, cursor),
        NavDirection::Today => reset_to_today(view, today),
    }
}

/// Header text for the displayed period: `"January 2026"` or `"Q1 2026"`.
pub fn period_label(view: ViewMode, cursor: CalendarDate) -> String {
    match view {
        ViewMode::Monthly | ViewMode::Weekly => cursor.format("%B %Y").to_string(),
        ViewMode::Quarterly => format!("Q{} {}", quarter_of(cursor), cursor.year()),
    }
}

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// Inclusive date range shown by the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineWindow {
    pub min_date: CalendarDate,
    pub max_date: CalendarDate,
}

impl TimelineWindow {
    /// Number of days in the window, both ends included.
    pub fn total_days(&self) -> i64 {
        (self.max_date - self.min_date).num_days() + 1
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min_date <= date && date <= self.max_date
    }
}

/// Visible date range for `view` anchored at `cursor`.
pub fn compute_window(view: ViewMode, cursor: CalendarDate) -> TimelineWindow {
    match view {
        ViewMode::Monthly => TimelineWindow {
            min_date: start_of_month(cursor),
            max_date: end_of_month(cursor),
        },
        ViewMode::Quarterly => TimelineWindow {
            min_date: start_of_quarter(cursor),
            max_date: end_of_quarter(cursor),
        },
        ViewMode::Weekly => TimelineWindow {
            min_date: start_of_week(start_of_month(cursor)),
            max_date: end_of_week(end_of_month(cursor)),
        },
    }
}

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

/// One unit of the timeline axis: a day, or a month in quarterly view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeColumn {
    pub date: CalendarDate,
    pub label: String,
    pub sub_label: Option<String>,
    /// Saturday/Sunday day column. Always `false` for month columns.
    pub is_weekend: bool,
    /// Set by [`build_layout`] on the column containing today.
    pub is_today: bool,
}

/// Axis columns for `window`, in chronological order.
pub fn generate_columns(view: ViewMode, window: &TimelineWindow) -> Vec<TimeColumn> {
    if view.has_day_columns() {
        window
            .min_date
            .iter_days()
            .take_while(|day| *day <= window.max_date)
            .map(|day| TimeColumn {
                date: day,
                label: day.day().to_string(),
                sub_label: Some(day.format("%a").to_string()),
                is_weekend: is_weekend(day),
                is_today: false,
            })
            .collect()
    } else {
        let last = start_of_month(window.max_date);
        std::iter::successors(Some(start_of_month(window.min_date)), |m| {
            Some(*m + Months::new(1))
        })
        .take_while(|m| *m <= last)
        .map(|month| TimeColumn {
            date: month,
            label: month.format("%b").to_string(),
            sub_label: Some(month.year().to_string()),
            is_weekend: false,
            is_today: false,
        })
        .collect()
    }
}

/// A run of consecutive day columns that share a Monday-based week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGroup {
    pub week_start: CalendarDate,
    /// `"Week of Jan 5"`.
    pub label: String,
    pub day_count: usize,
}

/// Group day columns into weeks for the upper header row.
///
/// Returns an empty list for quarterly view.
pub fn week_groups(view: ViewMode, columns: &[TimeColumn]) -> Vec<WeekGroup> {
    if !view.has_day_columns() {
        return Vec::new();
    }

    let mut groups: Vec<WeekGroup> = Vec::new();
    for column in columns {
        let week_start = start_of_week(column.date);
        match groups.last_mut() {
            Some(group) if group.week_start == week_start => group.day_count += 1,
            _ => groups.push(WeekGroup {
                week_start,
                label: format!("Week of {}", week_start.format("%b %-d")),
                day_count: 1,
            }),
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Pixel dimensions of a rendered window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGeometry {
    pub column_width: f64,
    pub column_count: usize,
    pub total_width: f64,
    pub total_days: i64,
    pub pixels_per_day: f64,
}

impl TimelineGeometry {
    pub fn new(view: ViewMode, window: &TimelineWindow, column_count: usize) -> Self {
        let column_width = view.column_width();
        let total_width = column_count as f64 * column_width;
        let total_days = window.total_days();
        Self {
            column_width,
            column_count,
            total_width,
            total_days,
            pixels_per_day: total_width / total_days as f64,
        }
    }
}

/// Horizontal placement of one stage bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageSpan {
    pub left: f64,
    pub width: f64,
}

/// Place a stage bar relative to the window start.
///
/// Returns `None` unless both dates are set. Both endpoints are inclusive
/// and the width never drops below [`MIN_STAGE_WIDTH`]. An inverted range
/// (`start > end`) is not rejected; it is floored to the minimum width.
pub fn layout_stage(
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    min_date: CalendarDate,
    pixels_per_day: f64,
) -> Option<StageSpan> {
    let (start, end) = (start?, end?);
    let start_offset = (start - min_date).num_days() as f64;
    let duration = ((end - start).num_days() + 1) as f64;
    Some(StageSpan {
        left: start_offset * pixels_per_day,
        width: (duration * pixels_per_day).max(MIN_STAGE_WIDTH),
    })
}

/// Pixel offset of the "today" marker, or `None` if today is off-screen.
pub fn today_marker_offset(
    today: CalendarDate,
    window: &TimelineWindow,
    pixels_per_day: f64,
) -> Option<f64> {
    window
        .contains(today)
        .then(|| (today - window.min_date).num_days() as f64 * pixels_per_day)
}

// ---------------------------------------------------------------------------
// Row indicators
// ---------------------------------------------------------------------------

/// Small badges shown next to a project name.
///
/// Serialized as `{ "kind": "ready_for_dev", "label": "Ready for Development" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIndicator {
    ReadyForDev,
    ReadyForQa,
    Discarded,
}

impl RowIndicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadyForDev => "ready_for_dev",
            Self::ReadyForQa => "ready_for_qa",
            Self::Discarded => "discarded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ReadyForDev => "Ready for Development",
            Self::ReadyForQa => "Ready for QA",
            Self::Discarded => "Discarded",
        }
    }
}

impl Serialize for RowIndicator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut badge = serializer.serialize_struct("RowIndicator", 2)?;
        badge.serialize_field("kind", self.as_str())?;
        badge.serialize_field("label", self.label())?;
        badge.end()
    }
}

/// Indicators for a row whose status has already been classified.
pub fn row_indicators(status: ProjectStatus, discarded: bool) -> Vec<RowIndicator> {
    let mut indicators = Vec::new();
    match status {
        ProjectStatus::ReadyForDev => indicators.push(RowIndicator::ReadyForDev),
        ProjectStatus::ReadyForQa => indicators.push(RowIndicator::ReadyForQa),
        _ => {}
    }
    if discarded {
        indicators.push(RowIndicator::Discarded);
    }
    indicators
}

// ---------------------------------------------------------------------------
// Full layout
// ---------------------------------------------------------------------------

/// One positioned stage bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageBar {
    pub stage: LifecycleStage,
    pub label: &'static str,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    /// `start_date` rendered in the layout's [`DateFormat`].
    pub start_label: String,
    pub end_label: String,
    pub left: f64,
    pub width: f64,
}

/// One project row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRow {
    pub project_id: DbId,
    pub name: String,
    pub category: ProjectCategory,
    pub badge: &'static str,
    pub jira_link: Option<String>,
    pub discarded: bool,
    pub status: ProjectStatus,
    pub indicators: Vec<RowIndicator>,
    /// Stages with both dates set, in [`STAGE_ORDER`].
    pub bars: Vec<StageBar>,
}

/// Everything a renderer needs to draw one timeline period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    pub view: ViewMode,
    pub cursor: CalendarDate,
    pub period_label: String,
    pub window: TimelineWindow,
    pub geometry: TimelineGeometry,
    pub columns: Vec<TimeColumn>,
    pub week_groups: Vec<WeekGroup>,
    pub today: CalendarDate,
    pub today_offset: Option<f64>,
    /// Format used for the bar date labels.
    pub date_format: DateFormat,
    pub rows: Vec<TimelineRow>,
}

/// Lay out `projects` for the period at `cursor`.
///
/// Rows keep the order of `projects`. Bars are positioned even when they
/// fall partly or entirely outside the window; clipping is left to the
/// renderer. Bar dates are labelled in `date_format`.
pub fn build_layout(
    projects: &[Project],
    view: ViewMode,
    cursor: CalendarDate,
    today: CalendarDate,
    date_format: DateFormat,
) -> TimelineLayout {
    let window = compute_window(view, cursor);
    let mut columns = generate_columns(view, &window);
    if let Some(column) = columns.iter_mut().find(|c| match view {
        ViewMode::Quarterly => start_of_month(today) == c.date,
        _ => today == c.date,
    }) {
        column.is_today = true;
    }
    let week_groups = week_groups(view, &columns);
    let geometry = TimelineGeometry::new(view, &window, columns.len());

    let rows = projects
        .iter()
        .map(|project| {
            layout_row(
                project,
                &window,
                geometry.pixels_per_day,
                today,
                date_format,
            )
        })
        .collect();

    TimelineLayout {
        view,
        cursor,
        period_label: period_label(view, cursor),
        window,
        geometry,
        columns,
        week_groups,
        today,
        today_offset: today_marker_offset(today, &window, geometry.pixels_per_day),
        date_format,
        rows,
    }
}

fn layout_row(
    project: &Project,
    window: &TimelineWindow,
    pixels_per_day: f64,
    today: CalendarDate,
    date_format: DateFormat,
) -> TimelineRow {
    let status = classify(project, today);

    let bars = STAGE_ORDER
        .iter()
        .filter_map(|&stage| {
            let dates = project.stages.get(stage);
            let span = layout_stage(
                dates.start_date,
                dates.end_date,
                window.min_date,
                pixels_per_day,
            )?;
            let (start_date, end_date) = (dates.start_date?, dates.end_date?);
            Some(StageBar {
                stage,
                label: stage.label(),
                start_date,
                end_date,
                start_label: date_format.format(start_date),
                end_label: date_format.format(end_date),
                left: span.left,
                width: span.width,
            })
        })
        .collect();

    TimelineRow {
        project_id: project.id,
        name: project.name.clone(),
        category: project.category,
        badge: project.category.badge(),
        jira_link: project.jira_link.clone(),
        discarded: project.discarded,
        status,
        indicators: row_indicators(status, project.discarded),
        bars,
    }
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

    fn project(id: DbId, stages: StageDates, discarded: bool) -> Project {
        let ts = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        Project {
            id,
            name: format!("Project {id}"),
            category: ProjectCategory::Content,
            stages,
            discarded,
            jira_link: None,
            reason: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    // -----------------------------------------------------------------------
    // View mode
    // -----------------------------------------------------------------------

    #[test]
    fn view_mode_parsing() {
        assert_eq!(ViewMode::from_str_value("quarterly").unwrap(), ViewMode::Quarterly);
        assert_matches!(
            ViewMode::from_str_value("yearly"),
            Err(CoreError::Validation(msg)) if msg.contains("yearly")
        );
    }

    // -----------------------------------------------------------------------
    // Calendar helpers
    // -----------------------------------------------------------------------

    #[test]
    fn month_bounds_handle_leap_february() {
        assert_eq!(start_of_month(d("2028-02-17")), d("2028-02-01"));
        assert_eq!(end_of_month(d("2028-02-17")), d("2028-02-29"));
        assert_eq!(end_of_month(d("2026-02-03")), d("2026-02-28"));
        assert_eq!(end_of_month(d("2026-12-31")), d("2026-12-31"));
    }

    #[test]
    fn quarter_bounds() {
        assert_eq!(start_of_quarter(d("2026-05-20")), d("2026-04-01"));
        assert_eq!(end_of_quarter(d("2026-05-20")), d("2026-06-30"));
        assert_eq!(start_of_quarter(d("2026-12-31")), d("2026-10-01"));
        assert_eq!(end_of_quarter(d("2026-01-01")), d("2026-03-31"));
        assert_eq!(quarter_of(d("2026-09-30")), 3);
    }

    #[test]
    fn weeks_start_on_monday() {
        // 2026-01-01 is a Thursday.
        assert_eq!(start_of_week(d("2026-01-01")), d("2025-12-29"));
        assert_eq!(end_of_week(d("2026-01-01")), d("2026-01-04"));
        // Monday maps to itself, Sunday to the previous Monday.
        assert_eq!(start_of_week(d("2026-01-05")), d("2026-01-05"));
        assert_eq!(start_of_week(d("2026-01-11")), d("2026-01-05"));
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    #[test]
    fn monthly_navigation_crosses_year_boundary() {
        assert_eq!(previous(ViewMode::Monthly, d("2026-01-01")), d("2025-12-01"));
        assert_eq!(next(ViewMode::Monthly, d("2025-12-01")), d("2026-01-01"));
    }

    #[test]
    fn quarterly_navigation_moves_three_months() {
        assert_eq!(previous(ViewMode::Quarterly, d("2026-01-01")), d("2025-10-01"));
        assert_eq!(next(ViewMode::Quarterly, d("2026-10-01")), d("2027-01-01"));
    }

    #[test]
    fn next_undoes_previous() {
        for view in [ViewMode::Monthly, ViewMode::Quarterly] {
            let mut cursor = reset_to_today(view, d("2026-03-31"));
            for _ in 0..14 {
                assert_eq!(next(view, previous(view, cursor)), cursor);
                assert_eq!(previous(view, next(view, cursor)), cursor);
                cursor = next(view, cursor);
            }
        }
    }

    #[test]
    fn navigation_from_mid_month_cursor_normalizes() {
        assert_eq!(previous(ViewMode::Monthly, d("2026-03-31")), d("2026-02-01"));
        assert_eq!(next(ViewMode::Quarterly, d("2026-02-15")), d("2026-04-01"));
    }

    #[test]
    fn weekly_view_does_not_navigate() {
        let cursor = d("2026-01-01");
        assert_eq!(previous(ViewMode::Weekly, cursor), cursor);
        assert_eq!(next(ViewMode::Weekly, cursor), cursor);
    }

    #[test]
    fn reset_to_today_per_view() {
        let today = d("2026-08-19");
        assert_eq!(reset_to_today(ViewMode::Monthly, today), d("2026-08-01"));
        assert_eq!(reset_to_today(ViewMode::Quarterly, today), d("2026-07-01"));
        assert_eq!(reset_to_today(ViewMode::Weekly, today), d("2026-08-01"));
    }

    #[test]
    fn navigate_dispatches_direction() {
        let today = d("2026-08-19");
        let cursor = d("2026-01-01");
        assert_eq!(
            navigate(ViewMode::Monthly, cursor, NavDirection::Next, today),
            d("2026-02-01")
        );
        assert_eq!(
            navigate(ViewMode::Monthly, cursor, NavDirection::Today, today),
            d("2026-08-01")
        );
    }

    #[test]
    fn period_labels() {
        assert_eq!(period_label(ViewMode::Monthly, d("2026-01-01")), "January 2026");
        assert_eq!(period_label(ViewMode::Weekly, d("2026-09-01")), "September 2026");
        assert_eq!(period_label(ViewMode::Quarterly, d("2026-04-01")), "Q2 2026");
    }

    // -----------------------------------------------------------------------
    // Window and columns
    // -----------------------------------------------------------------------

    #[test]
    fn monthly_window_is_the_cursor_month() {
        let w = compute_window(ViewMode::Monthly, d("2026-02-01"));
        assert_eq!(w.min_date, d("2026-02-01"));
        assert_eq!(w.max_date, d("2026-02-28"));
        assert_eq!(w.total_days(), 28);
    }

    #[test]
    fn weekly_window_extends_to_whole_weeks() {
        // January 2026: Thu 1st .. Sat 31st.
        let w = compute_window(ViewMode::Weekly, d("2026-01-01"));
        assert_eq!(w.min_date, d("2025-12-29"));
        assert_eq!(w.max_date, d("2026-02-01"));
        assert_eq!(w.total_days() % 7, 0);
    }

    #[test]
    fn day_columns_cover_the_window() {
        let w = compute_window(ViewMode::Monthly, d("2026-01-01"));
        let cols = generate_columns(ViewMode::Monthly, &w);
        assert_eq!(cols.len(), 31);
        assert_eq!(cols[0].label, "1");
        assert_eq!(cols[0].sub_label.as_deref(), Some("Thu"));
        assert_eq!(cols[30].label, "31");
        assert!(cols[2].is_weekend, "Jan 3 2026 is a Saturday");
        assert!(!cols[4].is_weekend);
    }

    #[test]
    fn quarterly_columns_are_months() {
        let w = compute_window(ViewMode::Quarterly, d("2026-11-15"));
        let cols = generate_columns(ViewMode::Quarterly, &w);
        let labels: Vec<&str> = cols.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Oct", "Nov", "Dec"]);
        assert!(cols.iter().all(|c| c.sub_label.as_deref() == Some("2026")));
    }

    #[test]
    fn columns_are_idempotent() {
        let w1 = compute_window(ViewMode::Weekly, d("2026-03-01"));
        let w2 = compute_window(ViewMode::Weekly, d("2026-03-01"));
        assert_eq!(w1, w2);
        assert_eq!(
            generate_columns(ViewMode::Weekly, &w1),
            generate_columns(ViewMode::Weekly, &w2)
        );
    }

    #[test]
    fn week_groups_split_on_monday() {
        let w = compute_window(ViewMode::Monthly, d("2026-01-01"));
        let cols = generate_columns(ViewMode::Monthly, &w);
        let groups = week_groups(ViewMode::Monthly, &cols);
        // Jan 1-4, 5-11, 12-18, 19-25, 26-31.
        let counts: Vec<usize> = groups.iter().map(|g| g.day_count).collect();
        assert_eq!(counts, [4, 7, 7, 7, 6]);
        assert_eq!(groups[0].label, "Week of Dec 29");
        assert_eq!(groups[1].label, "Week of Jan 5");
    }

    #[test]
    fn quarterly_has_no_week_groups() {
        let w = compute_window(ViewMode::Quarterly, d("2026-01-01"));
        let cols = generate_columns(ViewMode::Quarterly, &w);
        assert!(week_groups(ViewMode::Quarterly, &cols).is_empty());
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    #[test]
    fn geometry_back_computes_pixels_per_day() {
        let w = compute_window(ViewMode::Quarterly, d("2026-01-01"));
        let g = TimelineGeometry::new(ViewMode::Quarterly, &w, 3);
        assert_eq!(g.total_width, 450.0);
        assert_eq!(g.total_days, 90);
        assert!((g.pixels_per_day - 5.0).abs() < 1e-9);

        let w = compute_window(ViewMode::Monthly, d("2026-04-01"));
        let g = TimelineGeometry::new(ViewMode::Monthly, &w, 30);
        assert_eq!(g.pixels_per_day, DAY_COLUMN_WIDTH);
    }

    #[test]
    fn single_day_stage_uses_full_day_width() {
        let span = layout_stage(
            Some(d("2026-04-10")),
            Some(d("2026-04-10")),
            d("2026-04-01"),
            120.0,
        )
        .unwrap();
        assert_eq!(span.left, 9.0 * 120.0);
        assert_eq!(span.width, 120.0);
    }

    #[test]
    fn narrow_stage_is_floored_to_minimum_width() {
        let span = layout_stage(Some(d("2026-01-05")), Some(d("2026-01-05")), d("2026-01-01"), 5.0)
            .unwrap();
        assert_eq!(span.width, MIN_STAGE_WIDTH);
    }

    #[test]
    fn inverted_range_is_floored_not_rejected() {
        let span = layout_stage(Some(d("2026-01-10")), Some(d("2026-01-01")), d("2026-01-01"), 40.0)
            .unwrap();
        assert_eq!(span.left, 360.0);
        assert_eq!(span.width, MIN_STAGE_WIDTH);
    }

    #[test]
    fn stage_before_window_has_negative_left() {
        let span = layout_stage(Some(d("2025-12-30")), Some(d("2026-01-02")), d("2026-01-01"), 40.0)
            .unwrap();
        assert_eq!(span.left, -80.0);
        assert_eq!(span.width, 160.0);
    }

    #[test]
    fn missing_date_yields_no_span() {
        assert!(layout_stage(None, Some(d("2026-01-02")), d("2026-01-01"), 40.0).is_none());
        assert!(layout_stage(Some(d("2026-01-02")), None, d("2026-01-01"), 40.0).is_none());
    }

    #[test]
    fn ordered_stages_do_not_overlap() {
        let min = d("2026-01-01");
        let ppd = 40.0;
        let a = layout_stage(Some(d("2026-01-02")), Some(d("2026-01-06")), min, ppd).unwrap();
        let b = layout_stage(Some(d("2026-01-09")), Some(d("2026-01-12")), min, ppd).unwrap();
        assert!(a.left + a.width <= b.left);
    }

    #[test]
    fn today_marker_only_inside_window() {
        let w = compute_window(ViewMode::Monthly, d("2026-01-01"));
        assert_eq!(today_marker_offset(d("2026-01-11"), &w, 40.0), Some(400.0));
        assert_eq!(today_marker_offset(d("2026-01-31"), &w, 40.0), Some(1200.0));
        assert_eq!(today_marker_offset(d("2026-02-01"), &w, 40.0), None);
        assert_eq!(today_marker_offset(d("2025-12-31"), &w, 40.0), None);
    }

    // -----------------------------------------------------------------------
    // Indicators and full layout
    // -----------------------------------------------------------------------

    #[test]
    fn indicators_follow_status_and_flag() {
        assert_eq!(
            row_indicators(ProjectStatus::ReadyForDev, false),
            [RowIndicator::ReadyForDev]
        );
        assert_eq!(
            row_indicators(ProjectStatus::Design, true),
            [RowIndicator::Discarded]
        );
        assert!(row_indicators(ProjectStatus::Qa, false).is_empty());
    }

    #[test]
    fn indicators_serialize_with_their_label() {
        let json = serde_json::to_value(row_indicators(ProjectStatus::ReadyForQa, true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "kind": "ready_for_qa", "label": "Ready for QA" },
                { "kind": "discarded", "label": "Discarded" }
            ])
        );
    }

    #[test]
    fn build_layout_positions_bars_and_marks_ready_rows() {
        let ready = project(
            1,
            StageDates {
                requirement: StageDate::span(d("2026-01-02"), d("2026-01-05")),
                design: StageDate::span(d("2026-01-06"), d("2026-01-10")),
                development: StageDate::new(None, None),
                ..Default::default()
            },
            false,
        );
        let half_dated = project(
            2,
            StageDates {
                qa: StageDate::new(Some(d("2026-01-20")), None),
                ..Default::default()
            },
            true,
        );

        let layout = build_layout(
            &[ready, half_dated],
            ViewMode::Monthly,
            d("2026-01-01"),
            d("2026-01-12"),
            DateFormat::MonthDayYear,
        );

        assert_eq!(layout.period_label, "January 2026");
        assert_eq!(layout.columns.len(), 31);
        assert_eq!(layout.geometry.total_width, 31.0 * DAY_COLUMN_WIDTH);
        assert_eq!(layout.today_offset, Some(11.0 * DAY_COLUMN_WIDTH));
        let today_cols: Vec<u32> = layout
            .columns
            .iter()
            .filter(|c| c.is_today)
            .map(|c| c.date.day())
            .collect();
        assert_eq!(today_cols, [12]);

        let row = &layout.rows[0];
        assert_eq!(row.status, ProjectStatus::ReadyForDev);
        assert_eq!(row.indicators, [RowIndicator::ReadyForDev]);
        assert_eq!(row.bars.len(), 2);
        assert_eq!(row.bars[0].stage, LifecycleStage::Requirement);
        assert_eq!(row.bars[0].left, 40.0);
        assert_eq!(row.bars[0].width, 160.0);
        assert_eq!(row.bars[1].stage, LifecycleStage::Design);
        assert_eq!(row.bars[1].start_label, "01/06/2026");
        assert_eq!(row.bars[1].end_label, "01/10/2026");

        let row = &layout.rows[1];
        assert_eq!(row.status, ProjectStatus::Qa);
        assert_eq!(row.indicators, [RowIndicator::Discarded]);
        assert!(row.bars.is_empty(), "open-ended stage has no bar");
    }
}
