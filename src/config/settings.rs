//! User settings for food-tracker
//!
//! Identifies the spreadsheet and describes where the date column and the
//! stats cells live. Entry column layout is fixed and not part of settings.

use serde::{Deserialize, Serialize};

use super::paths::FoodPaths;
use crate::error::FoodError;

/// Where the date column comes from at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateSource {
    /// Use the local date cache, fetching only when it is missing (default)
    #[default]
    Cached,
    /// Fetch the date column on every run and refresh the cache
    Live,
}

/// User settings for food-tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// ID of the budget spreadsheet
    #[serde(default)]
    pub spreadsheet_id: String,

    /// Active sheet (tab) name
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// First row holding a dated entry
    #[serde(default = "default_entries_start_row")]
    pub entries_start_row: u32,

    /// Column holding the date labels
    #[serde(default = "default_dates_column")]
    pub dates_column: String,

    /// Cells holding total, average and projected spend, in that order
    #[serde(default = "default_stats_range")]
    pub stats_range: String,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date column cache strategy
    #[serde(default)]
    pub date_source: DateSource,
}

fn default_sheet_name() -> String {
    "Su19 Data".to_string()
}

fn default_entries_start_row() -> u32 {
    9
}

fn default_dates_column() -> String {
    "B".to_string()
}

fn default_stats_range() -> String {
    "G3:G5".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            sheet_name: default_sheet_name(),
            entries_start_row: default_entries_start_row(),
            dates_column: default_dates_column(),
            stats_range: default_stats_range(),
            currency_symbol: default_currency(),
            date_source: DateSource::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &FoodPaths) -> Result<Self, FoodError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FoodError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FoodError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Check the settings needed before talking to the remote sheet
    pub fn validate(&self) -> Result<(), FoodError> {
        if self.spreadsheet_id.trim().is_empty() {
            return Err(FoodError::Config(
                "spreadsheet_id is not set; add it to config.json".into(),
            ));
        }
        if self.entries_start_row == 0 {
            return Err(FoodError::Config(
                "entries_start_row must be 1 or greater".into(),
            ));
        }
        if self.dates_column.is_empty() || !self.dates_column.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FoodError::Config(format!(
                "dates_column must be a column letter, got '{}'",
                self.dates_column
            )));
        }
        Ok(())
    }

    /// Open-ended range covering every date label, e.g. `B9:B`
    pub fn dates_range(&self) -> String {
        format!(
            "{col}{row}:{col}",
            col = self.dates_column,
            row = self.entries_start_row
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.sheet_name, "Su19 Data");
        assert_eq!(settings.entries_start_row, 9);
        assert_eq!(settings.stats_range, "G3:G5");
        assert_eq!(settings.date_source, DateSource::Cached);
        assert_eq!(settings.dates_range(), "B9:B");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FoodPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.entries_start_row, 9);
        assert!(settings.spreadsheet_id.is_empty());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FoodPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"spreadsheet_id": "abc123", "sheet_name": "F19 Data", "date_source": "live"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.spreadsheet_id, "abc123");
        assert_eq!(loaded.sheet_name, "F19 Data");
        assert_eq!(loaded.date_source, DateSource::Live);
    }

    #[test]
    fn test_unparseable_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FoodPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, FoodError::Config(_)));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FoodPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"spreadsheet_id": "xyz", "entries_start_row": 4}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.spreadsheet_id, "xyz");
        assert_eq!(loaded.entries_start_row, 4);
        assert_eq!(loaded.sheet_name, "Su19 Data");
        assert_eq!(loaded.dates_range(), "B4:B");
    }

    #[test]
    fn test_validate() {
        let mut settings = Settings::default();
        assert!(matches!(settings.validate(), Err(FoodError::Config(_))));

        settings.spreadsheet_id = "abc".into();
        assert!(settings.validate().is_ok());

        settings.dates_column = "B1".into();
        assert!(settings.validate().is_err());
    }
}
