//! User settings for Expense Tracker
//!
//! Display preferences (currency symbol, date format, chart width) and the
//! audit switch, kept as JSON next to the audit log.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings for Expense Tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Schema version for migration support
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    pub currency_symbol: String,

    /// strftime pattern for dates in listings and charts
    pub date_format: String,

    /// Width in characters of the longest bar in text charts
    pub chart_width: usize,

    /// Whether new expenses and exports are written to the audit log
    pub audit_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: 1,
            currency_symbol: "$".into(),
            date_format: "%Y-%m-%d".into(),
            chart_width: 40,
            audit_enabled: true,
        }
    }
}

/// Requested changes to the stored settings; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub currency_symbol: Option<String>,
    pub date_format: Option<String>,
    pub chart_width: Option<usize>,
    pub audit_enabled: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.currency_symbol.is_none()
            && self.date_format.is_none()
            && self.chart_width.is_none()
            && self.audit_enabled.is_none()
    }
}

impl Settings {
    /// Load settings from disk, or defaults if there is no settings file
    ///
    /// The defaults are not written; that happens on the first `save`.
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();
        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;
        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would break rendering later
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ExpenseError::Config(format!(
                "Invalid date format '{}'",
                self.date_format
            )));
        }
        if self.chart_width == 0 {
            return Err(ExpenseError::Config("Chart width must be at least 1".into()));
        }
        Ok(())
    }

    /// Apply an update, keeping `self` unchanged if the result is invalid
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<(), ExpenseError> {
        let mut next = self.clone();
        if let Some(symbol) = update.currency_symbol {
            next.currency_symbol = symbol;
        }
        if let Some(format) = update.date_format {
            next.date_format = format;
        }
        if let Some(width) = update.chart_width {
            next.chart_width = width;
        }
        if let Some(enabled) = update.audit_enabled {
            next.audit_enabled = enabled;
        }

        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths_in(temp_dir: &TempDir) -> ExpensePaths {
        ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_or_create(&paths_in(&temp_dir)).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert!(!paths_in(&temp_dir).settings_file().exists());
    }

    #[test]
    fn test_apply_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths_in(&temp_dir);

        let mut settings = Settings::default();
        settings
            .apply(SettingsUpdate {
                currency_symbol: Some("€".into()),
                audit_enabled: Some(false),
                ..Default::default()
            })
            .unwrap();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert!(!loaded.audit_enabled);
        assert_eq!(loaded.chart_width, 40);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"chart_width": 20}"#).unwrap();
        assert_eq!(settings.chart_width, 20);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_bad_date_format_in_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths_in(&temp_dir);
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_invalid_update_is_not_applied() {
        let mut settings = Settings::default();

        let err = settings
            .apply(SettingsUpdate {
                currency_symbol: Some("£".into()),
                date_format: Some("%Y-%".into()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, ExpenseError::Config(_)));
        assert_eq!(settings, Settings::default());
        assert!(settings.apply(SettingsUpdate { chart_width: Some(0), ..Default::default() }).is_err());
    }

    #[test]
    fn test_update_emptiness() {
        assert!(SettingsUpdate::default().is_empty());
        assert!(!SettingsUpdate { chart_width: Some(10), ..Default::default() }.is_empty());
    }
}
