//! Storage layer for food-tracker
//!
//! Local JSON caches with atomic writes. The spreadsheet itself is the
//! source of truth; nothing here is authoritative.

pub mod cache;
pub mod file_io;

pub use cache::{CachedDates, DateCache, JsonCache, StatsCacheFile};
pub use file_io::{read_json_optional, write_json_atomic};

use crate::config::paths::FoodPaths;

/// Both local caches, located under the cache directory
pub struct CacheStore {
    pub dates: DateCache,
    pub stats: StatsCacheFile,
}

impl CacheStore {
    pub fn new(paths: &FoodPaths) -> Self {
        Self {
            dates: DateCache::new(paths.dates_cache_file()),
            stats: StatsCacheFile::new(paths.stats_cache_file()),
        }
    }
}
