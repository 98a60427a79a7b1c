//! Core data models for food-tracker
//!
//! This module contains the entry, date and statistics types that flow from
//! the command line to the remote sheet.

pub mod date_ref;
pub mod entry;
pub mod money;
pub mod stats;

pub use date_ref::{format_label, DateReference};
pub use entry::{
    ColumnSpan, EntryKind, MealCategory, MealEntry, MealKind, ShoppingEntry, DINNER_COLUMNS,
    LUNCH_COLUMNS, SHOPPING_COLUMNS,
};
pub use money::{Money, MoneyParseError};
pub use stats::{StatsChange, StatsDelta, StatsSnapshot};
