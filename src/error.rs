//! Custom error types for food-tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for food-tracker operations
#[derive(Error, Debug)]
pub enum FoodError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The resolved date label has no row in the sheet
    #[error("Date not found in sheet: {label} ({hint})")]
    DateNotFound { label: String, hint: &'static str },

    /// Entry type outside LUNCH/DINNER/SHOPPING
    #[error("Invalid entry kind: '{0}' (expected LUNCH, DINNER or SHOPPING)")]
    InvalidEntryKind(String),

    /// Failure reading from the remote sheet
    #[error("Remote read failed: {0}")]
    RemoteRead(String),

    /// Failure writing to the remote sheet
    #[error("Remote write failed: {0}")]
    RemoteWrite(String),

    /// Malformed local cache content
    #[error("Cache is corrupt: {0}")]
    CacheCorrupt(String),

    /// Missing or unusable credentials
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

const DATE_HINT: &str = "check the date, or that the sheet contains it";
const CACHED_DATE_HINT: &str = "the cached dates may be out of date; retry with --refresh-dates";

impl FoodError {
    /// Create a "date not found" error for a resolved label
    pub fn date_not_found(label: impl Into<String>) -> Self {
        Self::DateNotFound {
            label: label.into(),
            hint: DATE_HINT,
        }
    }

    /// Point a "date not found" error at `--refresh-dates`; other errors pass through
    pub fn with_refresh_hint(self) -> Self {
        match self {
            Self::DateNotFound { label, .. } => Self::DateNotFound {
                label,
                hint: CACHED_DATE_HINT,
            },
            other => other,
        }
    }

    /// Check if this is a "date not found" error
    pub fn is_date_not_found(&self) -> bool {
        matches!(self, Self::DateNotFound { .. })
    }
}

impl From<std::io::Error> for FoodError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for food-tracker operations
pub type FoodResult<T> = Result<T, FoodError>;
