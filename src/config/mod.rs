//! Configuration module for food-tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Sheet layout settings persistence

pub mod paths;
pub mod settings;

pub use paths::FoodPaths;
pub use settings::{DateSource, Settings};
