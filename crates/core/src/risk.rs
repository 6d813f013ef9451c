//! Risk severity levels and panel ordering.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const SEVERITY_LOW: &str = "low";
pub const SEVERITY_MEDIUM: &str = "medium";
pub const SEVERITY_HIGH: &str = "high";
pub const SEVERITY_CRITICAL: &str = "critical";

/// All valid severity strings.
pub const VALID_SEVERITIES: &[&str] = &[
    SEVERITY_LOW,
    SEVERITY_MEDIUM,
    SEVERITY_HIGH,
    SEVERITY_CRITICAL,
];

/// How badly a risk threatens the roadmap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSeverity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl RiskSeverity {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            SEVERITY_LOW => Ok(Self::Low),
            SEVERITY_MEDIUM => Ok(Self::Medium),
            SEVERITY_HIGH => Ok(Self::High),
            SEVERITY_CRITICAL => Ok(Self::Critical),
            _ => Err(CoreError::Validation(format!(
                "Invalid severity '{s}'. Must be one of: {}",
                VALID_SEVERITIES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => SEVERITY_LOW,
            Self::Medium => SEVERITY_MEDIUM,
            Self::High => SEVERITY_HIGH,
            Self::Critical => SEVERITY_CRITICAL,
        }
    }

    /// Panel position: critical first, low last.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }
}

impl TryFrom<String> for RiskSeverity {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

/// Sort items most severe first. Items of equal severity keep their
/// relative order.
pub fn sort_by_severity<T>(items: &mut [T], severity: impl Fn(&T) -> RiskSeverity) {
    items.sort_by_key(|item| severity(item).rank());
}
