//! Report formatting utilities for terminal output

use crate::models::{EntryKind, MealCategory, Money, StatsChange};

/// Width of the label column in the stats report
const LABEL_WIDTH: usize = 10;

/// One-line confirmation after a successful write
pub fn format_confirmation(
    kind: EntryKind,
    name: &str,
    amount: Money,
    label: &str,
    row: u32,
    symbol: &str,
) -> String {
    format!(
        "Done! {} '{}' ({}) recorded on {} (row {}).",
        kind,
        name,
        amount.format_with_symbol(symbol),
        label,
        row
    )
}

/// Average and projected spend after a write, each with its own signed change
pub fn format_stats_report(change: &StatsChange, symbol: &str) -> String {
    let delta = change.delta();
    [
        stat_line("Average:", change.fresh.average, delta.average, symbol),
        stat_line("Projected:", change.fresh.projected, delta.projected, symbol),
    ]
    .join("\n")
}

fn stat_line(label: &str, value: Money, delta: Money, symbol: &str) -> String {
    format!(
        "{:<width$} {} ({})",
        label,
        value.format_with_symbol(symbol),
        delta.format_delta(),
        width = LABEL_WIDTH
    )
}

/// Numbered category menu shown before a meal is recorded
pub fn format_category_menu() -> String {
    let mut menu = String::from("MEAL TYPES");
    for (i, category) in MealCategory::ALL.iter().enumerate() {
        menu.push_str(&format!("\n({}) {}", i + 1, category));
    }
    menu
}
