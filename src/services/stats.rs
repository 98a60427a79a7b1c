//! Stats service
//!
//! Reads the summary cells and keeps the local stats cache. The cache never
//! expires: a stored snapshot is trusted as the baseline until the next
//! stats-enabled write overwrites it, even if another writer has changed the
//! sheet in the meantime.

use log::{debug, info};

use crate::error::{FoodError, FoodResult};
use crate::models::{Money, StatsSnapshot};
use crate::sheets::{Grid, MajorDimension, SheetStore};
use crate::storage::StatsCacheFile;

/// Service for the (total, average, projected) snapshot
pub struct StatsService<'a, S: SheetStore> {
    sheet: &'a S,
    cache: &'a StatsCacheFile,
    range: String,
}

impl<'a, S: SheetStore> StatsService<'a, S> {
    /// `range` is the sheet-qualified stats range
    pub fn new(sheet: &'a S, cache: &'a StatsCacheFile, range: impl Into<String>) -> Self {
        Self {
            sheet,
            cache,
            range: range.into(),
        }
    }

    pub fn range(&self) -> &str {
        &self.range
    }

    /// Cached snapshot, if any
    pub fn load(&self) -> FoodResult<Option<StatsSnapshot>> {
        self.cache.load()
    }

    /// Replace the cached snapshot
    pub fn store(&self, snapshot: &StatsSnapshot) -> FoodResult<()> {
        self.cache.store(snapshot)
    }

    /// Read the stats cells from the sheet
    pub fn fetch_fresh(&self) -> FoodResult<StatsSnapshot> {
        let grid = self.sheet.read(&self.range, MajorDimension::Columns)?;
        let snapshot = parse_stats_grid(&grid)?;
        debug!("Fetched stats {:?}", snapshot);
        Ok(snapshot)
    }

    /// Snapshot before a write: the cache if present, otherwise the sheet
    pub fn baseline(&self) -> FoodResult<StatsSnapshot> {
        match self.load()? {
            Some(snapshot) => {
                info!("Using cached stats as baseline");
                Ok(snapshot)
            }
            None => self.fetch_fresh(),
        }
    }
}

/// Parse a COLUMNS-major read of the stats cells into a snapshot
///
/// Each cell loses its one-character currency prefix and is rounded to cents.
pub fn parse_stats_grid(grid: &Grid) -> FoodResult<StatsSnapshot> {
    let cells = grid.first().map(Vec::as_slice).unwrap_or_default();
    if cells.len() < 3 {
        return Err(FoodError::RemoteRead(format!(
            "Expected 3 stats cells, got {}",
            cells.len()
        )));
    }

    let mut values = [Money::zero(); 3];
    for (value, cell) in values.iter_mut().zip(cells) {
        *value = Money::parse_prefixed_cell(cell)
            .map_err(|e| FoodError::RemoteRead(format!("Bad stats cell: {}", e)))?;
    }
    Ok(StatsSnapshot::from(values))
}
