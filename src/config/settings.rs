//! User settings for farmdesk
//!
//! Manages display preferences, task-urgency thresholds and chart defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::FarmdeskPaths;
use crate::analytics::chart::{ChartPeriod, ChartType};
use crate::analytics::temporal::DEFAULT_DUE_SOON_DAYS;
use crate::error::FarmdeskError;

/// User settings for farmdesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Lookahead window for the task list's "due soon" marker
    #[serde(default = "default_due_soon_days")]
    pub due_soon_days: i64,

    /// Lookahead window used when picking the dashboard's urgent tasks
    #[serde(default = "default_dashboard_due_soon_days")]
    pub dashboard_due_soon_days: i64,

    /// How many urgent tasks the dashboard shows
    #[serde(default = "default_urgent_task_limit")]
    pub urgent_task_limit: usize,

    #[serde(default)]
    pub default_chart_type: ChartType,

    #[serde(default)]
    pub default_chart_period: ChartPeriod,

    /// Seed file to load instead of the one in the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_due_soon_days() -> i64 {
    DEFAULT_DUE_SOON_DAYS
}

fn default_dashboard_due_soon_days() -> i64 {
    2
}

fn default_urgent_task_limit() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            due_soon_days: default_due_soon_days(),
            dashboard_due_soon_days: default_dashboard_due_soon_days(),
            urgent_task_limit: default_urgent_task_limit(),
            default_chart_type: ChartType::default(),
            default_chart_period: ChartPeriod::default(),
            seed_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FarmdeskPaths) -> Result<Self, FarmdeskError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FarmdeskError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FarmdeskError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FarmdeskPaths) -> Result<(), FarmdeskError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FarmdeskError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FarmdeskError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// The seed file to load: the configured override, else the data-dir default
    pub fn resolve_seed_file(&self, paths: &FarmdeskPaths) -> PathBuf {
        self.seed_file.clone().unwrap_or_else(|| paths.seed_file())
    }
}
