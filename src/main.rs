use std::io;

use anyhow::Result;
use chrono::Local;
use clap::{ArgAction, Parser};

use food_tracker::cli::{build_request, run_entry, EntryArgs};
use food_tracker::config::{FoodPaths, Settings};
use food_tracker::sheets::{load_access_token, GoogleSheetsClient};
use food_tracker::storage::CacheStore;

#[derive(Parser)]
#[command(
    name = "food",
    version,
    about = "Record food and shopping expenses into a dated budget spreadsheet",
    long_about = "Writes a LUNCH, DINNER or SHOPPING entry into the row for a date \
                  in the budget sheet. With --stats, meal entries also report how \
                  the sheet's average and projected spend changed.",
    allow_negative_numbers = true
)]
struct Cli {
    #[command(flatten)]
    entry: EntryArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Show resolved paths and settings, then exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = FoodPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;

    if cli.show_config {
        print_config(&paths, &settings);
        return Ok(());
    }

    // Validate and prompt before touching the network
    let stdin = io::stdin();
    let request = build_request(cli.entry, &mut stdin.lock(), &mut io::stdout())?;

    settings.validate()?;
    paths.ensure_directories()?;
    let token = load_access_token(&paths.token_file())?;
    let sheet = GoogleSheetsClient::new(settings.spreadsheet_id.clone(), token)?;
    let caches = CacheStore::new(&paths);

    run_entry(&sheet, &settings, &caches, &request, Local::now().date_naive())?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(format!("warn,food_tracker={}", level)),
    )
    .format_timestamp(None)
    .init();
}

fn print_config(paths: &FoodPaths, settings: &Settings) {
    println!("food-tracker Configuration");
    println!("==========================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Dates cache:     {}", paths.dates_cache_file().display());
    println!("Stats cache:     {}", paths.stats_cache_file().display());
    println!("Token file:      {}", paths.token_file().display());
    println!();
    println!("Settings:");
    let spreadsheet_id = if settings.spreadsheet_id.is_empty() {
        "(not set)"
    } else {
        settings.spreadsheet_id.as_str()
    };
    println!("  Spreadsheet ID:    {}", spreadsheet_id);
    println!("  Sheet name:        {}", settings.sheet_name);
    println!("  Entries start row: {}", settings.entries_start_row);
    println!("  Dates range:       {}", settings.dates_range());
    println!("  Stats range:       {}", settings.stats_range);
    println!("  Date source:       {:?}", settings.date_source);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "food", "lunch", "Sandwich", "8.50", "-d", "YESTERDAY", "-s", "-c", "1",
        ])
        .unwrap();
        assert_eq!(cli.entry.entry_type.as_deref(), Some("lunch"));
        assert_eq!(cli.entry.date, "YESTERDAY");
        assert!(cli.entry.stats);
        assert_eq!(cli.entry.category.as_deref(), Some("1"));
    }

    #[test]
    fn test_date_defaults_to_today() {
        let cli = Cli::try_parse_from(["food", "shopping", "Store", "12"]).unwrap();
        assert_eq!(cli.entry.date, "TODAY");
        assert!(!cli.entry.stats);
    }

    #[test]
    fn test_positionals_required_without_show_config() {
        assert!(Cli::try_parse_from(["food", "lunch"]).is_err());
        assert!(Cli::try_parse_from(["food", "--show-config"]).is_ok());
    }
}
