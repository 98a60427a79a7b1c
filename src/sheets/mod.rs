//! Remote tabular store
//!
//! The spreadsheet is reached through the [`SheetStore`] trait so the
//! services can run against [`MemorySheet`] in tests and
//! [`GoogleSheetsClient`] for real.

pub mod auth;
pub mod google;
pub mod memory;

pub use auth::load_access_token;
pub use google::GoogleSheetsClient;
pub use memory::{MemorySheet, WriteCall};

use serde_json::Value;

use crate::error::FoodResult;

/// Cell text as returned by a read, outer vector per major dimension
pub type Grid = Vec<Vec<String>>;

/// Orientation of returned values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorDimension {
    Rows,
    Columns,
}

impl MajorDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rows => "ROWS",
            Self::Columns => "COLUMNS",
        }
    }
}

/// How written values are interpreted by the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueInputOption {
    Raw,
    /// Parsed as if typed into the UI (numbers stay numbers, formulas evaluate)
    #[default]
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Raw => "RAW",
            Self::UserEntered => "USER_ENTERED",
        }
    }
}

/// Read and write access to one spreadsheet
pub trait SheetStore {
    /// Read several ranges in one round trip, results in request order
    fn batch_read(&self, ranges: &[String], dimension: MajorDimension) -> FoodResult<Vec<Grid>>;

    /// Read a single range
    fn read(&self, range: &str, dimension: MajorDimension) -> FoodResult<Grid>;

    /// Write a block of values in one round trip
    fn write(&self, range: &str, values: Vec<Vec<Value>>, input: ValueInputOption) -> FoodResult<()>;
}

/// Qualify a range with its sheet name: `'Su19 Data'!C12:E12`
pub fn qualified_range(sheet_name: &str, range: &str) -> String {
    format!("'{}'!{}", sheet_name.replace('\'', "''"), range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_range() {
        assert_eq!(qualified_range("Su19 Data", "G3:G5"), "'Su19 Data'!G3:G5");
        assert_eq!(qualified_range("Bob's", "B9:B"), "'Bob''s'!B9:B");
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(MajorDimension::Columns.as_str(), "COLUMNS");
        assert_eq!(ValueInputOption::default().as_str(), "USER_ENTERED");
    }
}
