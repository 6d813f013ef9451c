//! User-selectable display formats for calendar dates.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::CalendarDate;

/// Supported display formats. Defaults to day-first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
}

pub const ALL_DATE_FORMATS: [DateFormat; 3] = [
    DateFormat::DayMonthYear,
    DateFormat::MonthDayYear,
    DateFormat::Iso,
];

impl DateFormat {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        ALL_DATE_FORMATS
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid date format '{s}'. Must be one of: DD/MM/YYYY, MM/DD/YYYY, YYYY-MM-DD"
                ))
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::Iso => "YYYY-MM-DD",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Self::DayMonthYear => "%d/%m/%Y",
            Self::MonthDayYear => "%m/%d/%Y",
            Self::Iso => "%Y-%m-%d",
        }
    }

    pub fn format(&self, date: CalendarDate) -> String {
        date.format(self.pattern()).to_string()
    }

    /// Format an optional date; `None` renders as an empty string.
    pub fn format_opt(&self, date: Option<CalendarDate>) -> String {
        date.map(|d| self.format(d)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_are_zero_padded() {
        let date: CalendarDate = "2026-03-07".parse().unwrap();
        assert_eq!(DateFormat::DayMonthYear.format(date), "07/03/2026");
        assert_eq!(DateFormat::MonthDayYear.format(date), "03/07/2026");
        assert_eq!(DateFormat::Iso.format(date), "2026-03-07");
    }

    #[test]
    fn missing_date_is_empty() {
        assert_eq!(DateFormat::default().format_opt(None), "");
    }

    #[test]
    fn parses_display_names() {
        assert_eq!(
            DateFormat::from_str_value("MM/DD/YYYY").unwrap(),
            DateFormat::MonthDayYear
        );
        assert!(DateFormat::from_str_value("DD.MM.YYYY").is_err());
        let json = serde_json::to_value(DateFormat::Iso).unwrap();
        assert_eq!(json, "YYYY-MM-DD");
    }
}
