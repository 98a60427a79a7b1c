//! Entry CLI command
//!
//! Turns the command-line arguments into an entry, resolves its row, writes
//! it, and prints the confirmation and optional stats report.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::Args;
use log::info;

use super::prompt::prompt_meal_category;
use crate::config::{DateSource, Settings};
use crate::display::{format_confirmation, format_stats_report};
use crate::error::{FoodError, FoodResult};
use crate::models::{DateReference, EntryKind, MealCategory, MealEntry, Money, ShoppingEntry};
use crate::services::{load_startup_state, LedgerWriter, StatsOutcome, StatsService};
use crate::sheets::{qualified_range, SheetStore};
use crate::storage::CacheStore;

/// Arguments for recording one entry
#[derive(Args, Debug, Clone)]
pub struct EntryArgs {
    /// Entry type: LUNCH, DINNER or SHOPPING (case-insensitive)
    #[arg(required_unless_present = "show_config")]
    pub entry_type: Option<String>,

    /// Item name for meals, store name for shopping
    #[arg(required_unless_present = "show_config")]
    pub name: Option<String>,

    /// Amount spent (e.g. "8.50")
    #[arg(required_unless_present = "show_config")]
    pub amount: Option<String>,

    /// Date label as it appears in the sheet (e.g. 7/14), or TODAY, YESTERDAY, TOMORROW
    #[arg(short, long, default_value = "TODAY")]
    pub date: String,

    /// Report how average and projected spend changed (meals only)
    #[arg(short, long)]
    pub stats: bool,

    /// Meal category by name or menu number; prompts when omitted
    #[arg(short, long)]
    pub category: Option<String>,

    /// Re-read the date column from the sheet and refresh its cache
    #[arg(long)]
    pub refresh_dates: bool,
}

/// A validated entry ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRequest {
    pub kind: EntryKind,
    pub name: String,
    pub amount: Money,
    pub date: DateReference,
    /// Set for meals, `None` for shopping
    pub category: Option<MealCategory>,
    pub stats: bool,
    pub refresh_dates: bool,
}

/// Validate arguments and pick a meal category, prompting if needed
///
/// Runs before any remote access, so a bad entry type fails fast.
pub fn build_request<R: BufRead, W: Write>(
    args: EntryArgs,
    input: &mut R,
    output: &mut W,
) -> FoodResult<EntryRequest> {
    let entry_type = args
        .entry_type
        .ok_or_else(|| FoodError::Validation("Missing entry type".into()))?;
    let kind = EntryKind::parse(&entry_type)?;

    let name = args
        .name
        .ok_or_else(|| FoodError::Validation("Missing name".into()))?;
    let amount_str = args
        .amount
        .ok_or_else(|| FoodError::Validation("Missing amount".into()))?;
    let amount = Money::parse(&amount_str).map_err(|e| {
        FoodError::Validation(format!(
            "Invalid amount: '{}'. Use a number like '8.50'. Error: {}",
            amount_str, e
        ))
    })?;

    let category = match (kind, args.category) {
        (EntryKind::Shopping, _) => None,
        (EntryKind::Meal(_), Some(choice)) => Some(MealCategory::parse(&choice).ok_or_else(|| {
            FoodError::Validation(format!(
                "Unknown meal category '{}'. Use Restaurant, Cooked/Home, Free or 1-3",
                choice
            ))
        })?),
        (EntryKind::Meal(_), None) => Some(prompt_meal_category(input, output)?),
    };

    Ok(EntryRequest {
        kind,
        name,
        amount,
        date: DateReference::parse(&args.date),
        category,
        stats: args.stats,
        refresh_dates: args.refresh_dates,
    })
}

/// Resolve the row, write the entry and report
pub fn run_entry<S: SheetStore>(
    sheet: &S,
    settings: &Settings,
    caches: &CacheStore,
    request: &EntryRequest,
    today: NaiveDate,
) -> FoodResult<()> {
    let want_stats = request.stats && request.kind.is_meal();
    if request.stats && !want_stats {
        info!("--stats only applies to meals; ignoring for {}", request.kind);
    }

    let source = if request.refresh_dates {
        DateSource::Live
    } else {
        settings.date_source
    };

    let stats_range = qualified_range(&settings.sheet_name, &settings.stats_range);
    let stats = StatsService::new(sheet, &caches.stats, stats_range);
    let state = load_startup_state(sheet, settings, &caches.dates, &stats, source, want_stats)?;

    let resolved = state
        .dates
        .resolve_reference(&request.date, today)
        .map_err(|e| if state.dates_from_cache { e.with_refresh_hint() } else { e })?;
    let writer = LedgerWriter::new(sheet, &settings.sheet_name);
    let confirmation = format_confirmation(
        request.kind,
        &request.name,
        request.amount,
        &resolved.label,
        resolved.row,
        &settings.currency_symbol,
    );

    match (request.kind, request.category, state.baseline) {
        (EntryKind::Meal(meal), Some(category), Some(baseline)) if want_stats => {
            let entry = MealEntry::new(meal, request.name.clone(), request.amount, category);
            let outcome = writer.record_meal_with_stats(&entry, resolved.row, baseline, &stats)?;
            println!("{}", confirmation);
            match outcome.stats {
                StatsOutcome::Changed(change) => {
                    println!("{}", format_stats_report(&change, &settings.currency_symbol));
                }
                StatsOutcome::Failed(e) => {
                    println!("Entry recorded, but statistics could not be refreshed: {}", e);
                }
            }
        }
        (EntryKind::Meal(meal), Some(category), _) => {
            let entry = MealEntry::new(meal, request.name.clone(), request.amount, category);
            writer.write_meal(&entry, resolved.row)?;
            println!("{}", confirmation);
        }
        (EntryKind::Meal(_), None, _) => {
            return Err(FoodError::Validation("Meal entries need a category".into()));
        }
        (EntryKind::Shopping, _, _) => {
            let entry = ShoppingEntry::new(request.name.clone(), request.amount);
            writer.write_shopping(&entry, resolved.row)?;
            println!("{}", confirmation);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FoodPaths;
    use crate::models::{MealKind, StatsSnapshot};
    use crate::sheets::{Grid, MemorySheet};
    use serde_json::{json, Value};
    use std::io::Cursor;
    use tempfile::TempDir;

    const DATES_RANGE: &str = "'Su19 Data'!B9:B";
    const STATS_RANGE: &str = "'Su19 Data'!G3:G5";

    fn args(entry_type: &str, name: &str, amount: &str) -> EntryArgs {
        EntryArgs {
            entry_type: Some(entry_type.into()),
            name: Some(name.into()),
            amount: Some(amount.into()),
            date: "TODAY".into(),
            stats: false,
            category: None,
            refresh_dates: false,
        }
    }

    fn column(values: &[&str]) -> Grid {
        vec![values.iter().map(|s| s.to_string()).collect()]
    }

    fn july_4() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 7, 4).unwrap()
    }

    fn sheet() -> MemorySheet {
        MemorySheet::new()
            .with_range(DATES_RANGE, column(&["7/1", "7/2", "7/3", "7/4", "7/5", "7/6", "7/7"]))
            .with_range(STATS_RANGE, column(&["$100.00", "$10.00", "$50.00"]))
            .with_range_after_write(STATS_RANGE, column(&["$108.50", "$12.50", "$47.00"]))
    }

    fn caches() -> (TempDir, CacheStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FoodPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, CacheStore::new(&paths))
    }

    #[test]
    fn test_build_request_prompts_for_meals() {
        let mut input = Cursor::new("1\n");
        let mut output = Vec::new();

        let request = build_request(args("lunch", "Sandwich", "8.50"), &mut input, &mut output).unwrap();
        assert_eq!(request.kind, EntryKind::Meal(MealKind::Lunch));
        assert_eq!(request.category, Some(MealCategory::Restaurant));
        assert_eq!(request.amount, Money::from_cents(850));
        assert_eq!(request.date, DateReference::Today);
    }

    #[test]
    fn test_build_request_category_flag_skips_prompt() {
        let mut a = args("DINNER", "Pasta", "0");
        a.category = Some("cooked/home".into());
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let request = build_request(a, &mut input, &mut output).unwrap();
        assert_eq!(request.category, Some(MealCategory::CookedHome));
        assert!(output.is_empty());
    }

    #[test]
    fn test_build_request_shopping_never_prompts() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let request =
            build_request(args("shopping", "Trader Joe's", "42.10"), &mut input, &mut output).unwrap();
        assert_eq!(request.category, None);
        assert!(output.is_empty());
    }

    #[test]
    fn test_build_request_rejects_unknown_kind() {
        let mut input = Cursor::new("1\n");
        let mut output = Vec::new();

        let err = build_request(args("brunch", "Eggs", "5"), &mut input, &mut output).unwrap_err();
        assert!(matches!(err, FoodError::InvalidEntryKind(_)));
        assert!(output.is_empty());
    }

    #[test]
    fn test_build_request_rejects_bad_amount() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = build_request(args("shopping", "Store", "lots"), &mut input, &mut output).unwrap_err();
        assert!(matches!(err, FoodError::Validation(_)));
    }

    #[test]
    fn test_lunch_today_lands_on_row_12() {
        let (_temp_dir, caches) = caches();
        let sheet = sheet();
        let request = EntryRequest {
            kind: EntryKind::Meal(MealKind::Lunch),
            name: "Sandwich".into(),
            amount: Money::from_cents(850),
            date: DateReference::Today,
            category: Some(MealCategory::Restaurant),
            stats: false,
            refresh_dates: false,
        };

        run_entry(&sheet, &Settings::default(), &caches, &request, july_4()).unwrap();

        let writes = sheet.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].range, "'Su19 Data'!C12:E12");
        assert_eq!(writes[0].values, vec![vec![json!("Sandwich"), json!(8.5), json!("Restaurant")]]);
    }

    #[test]
    fn test_shopping_lands_in_i_to_k() {
        let (_temp_dir, caches) = caches();
        let sheet = sheet();
        let request = EntryRequest {
            kind: EntryKind::Shopping,
            name: "Trader Joe's".into(),
            amount: Money::from_cents(4210),
            date: DateReference::Label("7/7".into()),
            category: None,
            stats: true,
            refresh_dates: false,
        };

        run_entry(&sheet, &Settings::default(), &caches, &request, july_4()).unwrap();

        let writes = sheet.writes();
        assert_eq!(writes[0].range, "'Su19 Data'!I15:K15");
        assert_eq!(writes[0].values, vec![vec![json!("Trader Joe's"), Value::Null, json!(42.1)]]);
        // Stats are meal-only
        assert_eq!(caches.stats.load().unwrap(), None);
    }

    #[test]
    fn test_meal_with_stats_updates_cache() {
        let (_temp_dir, caches) = caches();
        let sheet = sheet();
        let request = EntryRequest {
            kind: EntryKind::Meal(MealKind::Dinner),
            name: "Curry".into(),
            amount: Money::from_cents(850),
            date: DateReference::Yesterday,
            category: Some(MealCategory::Restaurant),
            stats: true,
            refresh_dates: false,
        };

        run_entry(&sheet, &Settings::default(), &caches, &request, july_4()).unwrap();

        assert_eq!(sheet.writes()[0].range, "'Su19 Data'!F11:H11");
        assert_eq!(
            caches.stats.load().unwrap(),
            Some(StatsSnapshot::new(
                Money::from_cents(10850),
                Money::from_cents(1250),
                Money::from_cents(4700),
            ))
        );
    }

    #[test]
    fn test_unknown_date_writes_nothing() {
        let (_temp_dir, caches) = caches();
        let sheet = sheet();
        let request = EntryRequest {
            kind: EntryKind::Shopping,
            name: "Store".into(),
            amount: Money::from_cents(100),
            date: DateReference::Label("9/1".into()),
            category: None,
            stats: false,
            refresh_dates: false,
        };

        let err = run_entry(&sheet, &Settings::default(), &caches, &request, july_4()).unwrap_err();
        assert!(err.is_date_not_found());
        assert!(!err.to_string().contains("--refresh-dates"));
        assert!(sheet.writes().is_empty());
    }

    fn lunch_today(refresh_dates: bool) -> EntryRequest {
        EntryRequest {
            kind: EntryKind::Meal(MealKind::Lunch),
            name: "Sandwich".into(),
            amount: Money::from_cents(850),
            date: DateReference::Today,
            category: Some(MealCategory::Restaurant),
            stats: false,
            refresh_dates,
        }
    }

    #[test]
    fn test_date_missing_from_cache_suggests_refresh() {
        let (_temp_dir, caches) = caches();
        caches
            .dates
            .store_for_range(DATES_RANGE, &["7/1".to_string(), "7/2".to_string()])
            .unwrap();
        let sheet = sheet();

        let err = run_entry(&sheet, &Settings::default(), &caches, &lunch_today(false), july_4())
            .unwrap_err();

        assert!(err.is_date_not_found());
        assert!(err.to_string().contains("--refresh-dates"));
        assert_eq!(sheet.read_calls(), 0);
        assert!(sheet.writes().is_empty());
    }

    #[test]
    fn test_refresh_dates_recovers_from_stale_cache() {
        let (_temp_dir, caches) = caches();
        caches
            .dates
            .store_for_range(DATES_RANGE, &["7/1".to_string(), "7/2".to_string()])
            .unwrap();
        let sheet = sheet();

        run_entry(&sheet, &Settings::default(), &caches, &lunch_today(true), july_4()).unwrap();

        assert_eq!(sheet.writes()[0].range, "'Su19 Data'!C12:E12");
        assert_eq!(caches.dates.load_for_range(DATES_RANGE).unwrap().unwrap().len(), 7);
    }

    #[test]
    fn test_sheet_switch_ignores_dates_cached_for_old_sheet() {
        let (_temp_dir, caches) = caches();
        run_entry(&sheet(), &Settings::default(), &caches, &lunch_today(false), july_4()).unwrap();

        let mut settings = Settings::default();
        settings.sheet_name = "F19 Data".into();
        let fall = MemorySheet::new().with_range("'F19 Data'!B9:B", column(&["8/28", "8/29"]));

        let err = run_entry(&fall, &settings, &caches, &lunch_today(false), july_4()).unwrap_err();

        assert!(err.is_date_not_found());
        assert!(!err.to_string().contains("--refresh-dates"));
        assert_eq!(fall.read_calls(), 1);
        assert!(fall.writes().is_empty());
    }
}
