//! Display formatting for terminal output
//!
//! Provides utilities for formatting write confirmations, the stats report
//! and the category menu.

pub mod report;

pub use report::{format_category_menu, format_confirmation, format_stats_report};
