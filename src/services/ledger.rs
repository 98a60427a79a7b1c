//! Ledger writer
//!
//! Writes one entry into its fixed column block on a resolved row. Each entry
//! is a single range write, so readers never see half a row.

use log::{info, warn};
use serde_json::Value;

use super::stats::StatsService;
use crate::error::{FoodError, FoodResult};
use crate::models::{ColumnSpan, MealEntry, ShoppingEntry, StatsChange, StatsSnapshot, SHOPPING_COLUMNS};
use crate::sheets::{qualified_range, SheetStore, ValueInputOption};

/// Where an entry landed
#[derive(Debug, Clone, PartialEq)]
pub struct WriteReceipt {
    /// Sheet-qualified range that was written
    pub range: String,
    pub row: u32,
}

/// Result of the statistics step that follows a meal write
#[derive(Debug)]
pub enum StatsOutcome {
    /// The entry was written and the fresh snapshot fetched
    Changed(StatsChange),
    /// The entry was written but fresh stats could not be fetched
    Failed(FoodError),
}

/// A meal write followed by a stats diff
#[derive(Debug)]
pub struct MealOutcome {
    pub receipt: WriteReceipt,
    pub stats: StatsOutcome,
}

/// Service that writes entries into the active sheet
pub struct LedgerWriter<'a, S: SheetStore> {
    sheet: &'a S,
    sheet_name: &'a str,
}

impl<'a, S: SheetStore> LedgerWriter<'a, S> {
    pub fn new(sheet: &'a S, sheet_name: &'a str) -> Self {
        Self { sheet, sheet_name }
    }

    /// Write a lunch or dinner entry
    pub fn write_meal(&self, entry: &MealEntry, row: u32) -> FoodResult<WriteReceipt> {
        self.write_row(entry.kind.columns(), row, entry.row_values())
    }

    /// Write a shopping entry; the middle column is left empty
    pub fn write_shopping(&self, entry: &ShoppingEntry, row: u32) -> FoodResult<WriteReceipt> {
        self.write_row(SHOPPING_COLUMNS, row, entry.row_values())
    }

    /// Write a meal, then diff fresh stats against `baseline`
    ///
    /// A failed write aborts. Once the write succeeds the entry counts as
    /// recorded; any failure fetching fresh stats is returned in the outcome
    /// instead of as an error. The fresh snapshot replaces the cached one.
    pub fn record_meal_with_stats(
        &self,
        entry: &MealEntry,
        row: u32,
        baseline: StatsSnapshot,
        stats: &StatsService<'_, S>,
    ) -> FoodResult<MealOutcome> {
        let receipt = self.write_meal(entry, row)?;

        let outcome = match stats.fetch_fresh() {
            Ok(fresh) => {
                if let Err(e) = stats.store(&fresh) {
                    warn!("Failed to cache fresh stats: {}", e);
                }
                StatsOutcome::Changed(StatsChange { baseline, fresh })
            }
            Err(e) => StatsOutcome::Failed(e),
        };

        Ok(MealOutcome {
            receipt,
            stats: outcome,
        })
    }

    fn write_row(&self, columns: ColumnSpan, row: u32, values: Vec<Value>) -> FoodResult<WriteReceipt> {
        let range = qualified_range(self.sheet_name, &columns.range_for_row(row));
        self.sheet
            .write(&range, vec![values], ValueInputOption::UserEntered)?;
        info!("Wrote {}", range);
        Ok(WriteReceipt { range, row })
    }
}
