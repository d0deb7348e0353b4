//! User settings for Pocketbook
//!
//! Display and logging preferences, stored as JSON in the config directory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::PocketbookPaths;
use crate::display::{try_format_date, DEFAULT_DATE_FORMAT};
use crate::error::PocketbookError;

/// User settings for Pocketbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format for history lines (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Line printed after each menu command
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_separator() -> String {
    "*** *** ***".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            log_filter: default_log_filter(),
            separator: default_separator(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PocketbookPaths) -> Result<Self, PocketbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PocketbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PocketbookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Not written until the caller asks
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketbookPaths) -> Result<(), PocketbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PocketbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            PocketbookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject settings that would break the menu output
    pub fn validate(&self) -> Result<(), PocketbookError> {
        if self.date_format.trim().is_empty() {
            return Err(PocketbookError::Validation(
                "date_format cannot be empty".into(),
            ));
        }
        let renders = NaiveDate::from_ymd_opt(2000, 1, 31)
            .and_then(|date| date.and_hms_opt(23, 59, 59))
            .and_then(|sample| try_format_date(sample, &self.date_format))
            .is_some();
        if !renders {
            return Err(PocketbookError::Validation(format!(
                "date_format is not a valid strftime format: {}",
                self.date_format
            )));
        }
        Ok(())
    }
}
