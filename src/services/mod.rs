//! Business logic layer
//!
//! Services resolve dates to rows, write entries, and reconcile the cached
//! stats snapshot with the sheet.

pub mod bootstrap;
pub mod date_index;
pub mod ledger;
pub mod stats;

pub use bootstrap::{load_startup_state, StartupState};
pub use date_index::{DateIndex, ResolvedRow};
pub use ledger::{LedgerWriter, MealOutcome, StatsOutcome, WriteReceipt};
pub use stats::{parse_stats_grid, StatsService};
