//! Local JSON caches for the date column and the stats snapshot
//!
//! Neither cache expires. A missing file and a corrupt file both read as
//! absent, which sends the caller back to the remote sheet. The date cache
//! also records the range it was read from and reads as absent for any
//! other range.

use std::path::PathBuf;

use log::{debug, info, warn};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::file_io::{read_json_optional, write_json_atomic};
use crate::error::{FoodError, FoodResult};
use crate::models::StatsSnapshot;

/// A single JSON document holding one cached value
#[derive(Debug, Clone)]
pub struct JsonCache<T> {
    path: PathBuf,
    _marker: std::marker::PhantomData<T>,
}

impl<T> JsonCache<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the cached value; missing or corrupt content yields `None`
    pub fn load(&self) -> FoodResult<Option<T>> {
        match read_json_optional(&self.path) {
            Ok(Some(value)) => {
                debug!("Cache hit: {}", self.path.display());
                Ok(Some(value))
            }
            Ok(None) => {
                debug!("Cache miss: {}", self.path.display());
                Ok(None)
            }
            Err(FoodError::CacheCorrupt(reason)) => {
                warn!("Ignoring corrupt cache ({}), will refetch", reason);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Replace the cached value
    pub fn store(&self, value: &T) -> FoodResult<()> {
        write_json_atomic(&self.path, value)?;
        debug!("Cache stored: {}", self.path.display());
        Ok(())
    }
}

/// Date column labels together with the sheet-qualified range they came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedDates {
    pub range: String,
    pub labels: Vec<String>,
}

/// Cached date column, one label per data row
pub type DateCache = JsonCache<CachedDates>;

impl DateCache {
    /// Labels cached for `range`; a cache taken from another range is absent
    pub fn load_for_range(&self, range: &str) -> FoodResult<Option<Vec<String>>> {
        match self.load()? {
            Some(cached) if cached.range == range => Ok(Some(cached.labels)),
            Some(cached) => {
                info!(
                    "Ignoring dates cached for {} (now {}), will refetch",
                    cached.range, range
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Replace the cached labels for `range`
    pub fn store_for_range(&self, range: &str, labels: &[String]) -> FoodResult<()> {
        self.store(&CachedDates {
            range: range.to_string(),
            labels: labels.to_vec(),
        })
    }
}

/// Cached stats snapshot, stored as `[total, average, projected]`
pub type StatsCacheFile = JsonCache<StatsSnapshot>;
