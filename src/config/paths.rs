//! Path management for food-tracker
//!
//! Provides XDG-compliant path resolution for configuration, caches, and tokens.
//!
//! ## Path Resolution Order
//!
//! 1. `FOOD_TRACKER_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/food-tracker` or `~/.config/food-tracker`
//! 3. Windows: `%APPDATA%\food-tracker`

use std::path::PathBuf;

use crate::error::FoodError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "FOOD_TRACKER_DIR";

/// Manages all paths used by food-tracker
#[derive(Debug, Clone)]
pub struct FoodPaths {
    /// Base directory for all food-tracker data
    base_dir: PathBuf,
}

impl FoodPaths {
    /// Create a new FoodPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FoodError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FoodPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/food-tracker/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the cache directory (~/.config/food-tracker/cache/)
    pub fn cache_dir(&self) -> PathBuf {
        self.base_dir.join("cache")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the cached date column
    pub fn dates_cache_file(&self) -> PathBuf {
        self.cache_dir().join("dates.json")
    }

    /// Get the path to the cached stats snapshot
    pub fn stats_cache_file(&self) -> PathBuf {
        self.cache_dir().join("stats.json")
    }

    /// Get the path to the stored OAuth token
    pub fn token_file(&self) -> PathBuf {
        self.base_dir.join("tokens").join("sheets.json")
    }

    /// Ensure the base and cache directories exist
    pub fn ensure_directories(&self) -> Result<(), FoodError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FoodError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.cache_dir())
            .map_err(|e| FoodError::Io(format!("Failed to create cache directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FoodError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| FoodError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("food-tracker"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FoodError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FoodError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("food-tracker"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FoodPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.cache_dir(), temp_dir.path().join("cache"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FoodPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.cache_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FoodPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.dates_cache_file(),
            temp_dir.path().join("cache").join("dates.json")
        );
        assert_eq!(
            paths.stats_cache_file(),
            temp_dir.path().join("cache").join("stats.json")
        );
        assert_eq!(
            paths.token_file(),
            temp_dir.path().join("tokens").join("sheets.json")
        );
    }
}
