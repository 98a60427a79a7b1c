//! food-tracker - record food and shopping spend into a dated budget sheet
//!
//! Each run resolves a date (or TODAY/YESTERDAY/TOMORROW) to a row of the
//! budget spreadsheet, writes one entry into that row's fixed column block,
//! and can report how the sheet's average and projected spend moved.
//!
//! # Architecture
//!
//! - `config`: Path resolution and sheet settings
//! - `error`: Custom error types
//! - `models`: Entries, date references, money and stats snapshots
//! - `storage`: Local JSON caches for the date column and stats
//! - `sheets`: Remote sheet access (Google Sheets and an in-memory fake)
//! - `services`: Date-to-row resolution, entry writing, stats reconciliation
//! - `display`: Terminal output formatting
//! - `cli`: Argument handling and prompts
//!
//! # Example
//!
//! ```rust,ignore
//! use food_tracker::config::{FoodPaths, Settings};
//!
//! let paths = FoodPaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod sheets;
pub mod storage;

pub use error::{FoodError, FoodResult};
