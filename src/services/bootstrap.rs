//! Startup loading of the date column and the stats baseline
//!
//! The date column follows the configured [`DateSource`]. When both the date
//! column and a baseline snapshot have to come from the sheet, they are read
//! in one batch request. Cached dates are only used when they were read
//! from the currently configured sheet range.

use log::{info, warn};

use super::date_index::DateIndex;
use super::stats::{parse_stats_grid, StatsService};
use crate::config::{DateSource, Settings};
use crate::error::{FoodError, FoodResult};
use crate::models::StatsSnapshot;
use crate::sheets::{qualified_range, MajorDimension, SheetStore};
use crate::storage::DateCache;

/// Everything a run needs before it can write
#[derive(Debug)]
pub struct StartupState {
    pub dates: DateIndex,
    /// Present only when a stats diff was requested
    pub baseline: Option<StatsSnapshot>,
    /// Whether the date labels came from the local cache
    pub dates_from_cache: bool,
}

/// Load the date index and, if `want_baseline`, the stats baseline
pub fn load_startup_state<S: SheetStore>(
    sheet: &S,
    settings: &Settings,
    date_cache: &DateCache,
    stats: &StatsService<'_, S>,
    source: DateSource,
    want_baseline: bool,
) -> FoodResult<StartupState> {
    let start_row = settings.entries_start_row;
    let dates_range = qualified_range(&settings.sheet_name, &settings.dates_range());
    let cached_dates = match source {
        DateSource::Cached => date_cache.load_for_range(&dates_range)?,
        DateSource::Live => None,
    };
    let cached_baseline = if want_baseline { stats.load()? } else { None };
    let fetch_baseline = want_baseline && cached_baseline.is_none();

    let dates_from_cache = cached_dates.is_some();
    let (dates, fetched_baseline) = match cached_dates {
        Some(labels) => {
            let fetched = if fetch_baseline {
                Some(stats.fetch_fresh()?)
            } else {
                None
            };
            (DateIndex::new(labels, start_row), fetched)
        }
        None => {
            let (dates, fetched) = if fetch_baseline {
                info!("Fetching dates and stats in one batch");
                let ranges = [dates_range.clone(), stats.range().to_string()];
                let mut grids = sheet.batch_read(&ranges, MajorDimension::Columns)?.into_iter();
                let dates_grid = grids.next().unwrap_or_default();
                let stats_grid = grids.next().ok_or_else(|| {
                    FoodError::RemoteRead("Batch read returned no stats range".into())
                })?;
                (
                    DateIndex::from_column_grid(dates_grid, start_row),
                    Some(parse_stats_grid(&stats_grid)?),
                )
            } else {
                info!("Fetching dates from {}", dates_range);
                let grid = sheet.read(&dates_range, MajorDimension::Columns)?;
                (DateIndex::from_column_grid(grid, start_row), None)
            };

            if let Err(e) = date_cache.store_for_range(&dates_range, dates.labels()) {
                warn!("Failed to cache dates: {}", e);
            }
            (dates, fetched)
        }
    };

    Ok(StartupState {
        dates,
        baseline: cached_baseline.or(fetched_baseline),
        dates_from_cache,
    })
}
