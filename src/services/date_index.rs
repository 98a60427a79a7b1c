//! Date index service
//!
//! Maps a date reference to the sheet row holding that date. Rows are laid
//! out in date-column order starting at the configured first entry row.

use chrono::NaiveDate;

use crate::error::{FoodError, FoodResult};
use crate::models::DateReference;
use crate::sheets::Grid;

/// A date reference resolved to a concrete row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRow {
    /// Label as it appears in the date column
    pub label: String,
    /// 1-based sheet row number
    pub row: u32,
}

/// Ordered date labels, one per data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateIndex {
    labels: Vec<String>,
    start_row: u32,
}

impl DateIndex {
    pub fn new(labels: Vec<String>, start_row: u32) -> Self {
        Self { labels, start_row }
    }

    /// Build from a COLUMNS-major read of the date column
    pub fn from_column_grid(grid: Grid, start_row: u32) -> Self {
        let labels = grid.into_iter().next().unwrap_or_default();
        Self::new(labels, start_row)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    /// Resolve a raw reference (`TODAY`, `7/14`, ...) against `today`
    pub fn resolve(&self, reference: &str, today: NaiveDate) -> FoodResult<ResolvedRow> {
        self.resolve_reference(&DateReference::parse(reference), today)
    }

    pub fn resolve_reference(
        &self,
        reference: &DateReference,
        today: NaiveDate,
    ) -> FoodResult<ResolvedRow> {
        let label = reference.to_label(today);
        let row = self.row_for_label(&label)?;
        Ok(ResolvedRow { label, row })
    }

    /// Row of the first exact match for `label`
    pub fn row_for_label(&self, label: &str) -> FoodResult<u32> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|offset| offset as u32 + self.start_row)
            .ok_or_else(|| FoodError::date_not_found(label))
    }
}
