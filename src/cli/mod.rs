//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the service layer.

pub mod entry;
pub mod prompt;

pub use entry::{build_request, run_entry, EntryArgs, EntryRequest};
pub use prompt::prompt_meal_category;
