//! Dashboard section toggles.
//!
//! Stored settings are sparse: a key only exists in the database once an
//! admin has changed it. [`DashboardSettings::from_stored`] layers whatever
//! is stored over the built-in defaults.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;

pub const SHOW_STATUS_SUMMARY: &str = "show_status_summary";
pub const SHOW_ACCOMPLISHMENTS: &str = "show_accomplishments";
pub const SHOW_TEAM: &str = "show_team";
pub const SHOW_PIPELINE: &str = "show_pipeline";

/// Every known toggle key with its default value.
pub const SETTING_DEFAULTS: &[(&str, bool)] = &[
    (SHOW_STATUS_SUMMARY, true),
    (SHOW_ACCOMPLISHMENTS, true),
    (SHOW_TEAM, false),
    (SHOW_PIPELINE, true),
];

/// Effective toggle values, defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DashboardSettings(BTreeMap<String, bool>);

impl Default for DashboardSettings {
    fn default() -> Self {
        Self(
            SETTING_DEFAULTS
                .iter()
                .map(|&(key, value)| (key.to_string(), value))
                .collect(),
        )
    }
}

impl DashboardSettings {
    /// Overlay stored `(key, value)` pairs on the defaults. Unknown stored
    /// keys are carried through unchanged.
    pub fn from_stored<I, K>(stored: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        let mut settings = Self::default();
        for (key, value) in stored {
            settings.0.insert(key.into(), value);
        }
        settings
    }

    /// Value of `key`, `false` if it is neither stored nor a known toggle.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Reject keys that are not one of [`SETTING_DEFAULTS`].
pub fn validate_setting_key(key: &str) -> Result<(), CoreError> {
    if SETTING_DEFAULTS.iter().any(|&(known, _)| known == key) {
        Ok(())
    } else {
        let valid: Vec<&str> = SETTING_DEFAULTS.iter().map(|&(k, _)| k).collect();
        Err(CoreError::Validation(format!(
            "Unknown setting '{key}'. Must be one of: {}",
            valid.join(", ")
        )))
    }
}
