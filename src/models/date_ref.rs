//! Date references as typed by the user
//!
//! A reference is either one of the relative descriptors or a literal label
//! exactly as it appears in the sheet's date column (e.g. `7/14`).

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// A logical date supplied on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    Tomorrow,
    Label(String),
}

impl DateReference {
    /// Parse a reference; descriptors are case-insensitive, labels are kept verbatim
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "TODAY" => Self::Today,
            "YESTERDAY" => Self::Yesterday,
            "TOMORROW" => Self::Tomorrow,
            _ => Self::Label(trimmed.to_string()),
        }
    }

    /// Day offset from today, for descriptors
    pub fn day_offset(&self) -> Option<i64> {
        match self {
            Self::Yesterday => Some(-1),
            Self::Today => Some(0),
            Self::Tomorrow => Some(1),
            Self::Label(_) => None,
        }
    }

    /// The sheet label this reference points at, given the current date
    pub fn to_label(&self, today: NaiveDate) -> String {
        match self.day_offset() {
            Some(offset) => format_label(today + Duration::days(offset)),
            None => self.to_string(),
        }
    }
}

/// Format a date the way the sheet labels rows: `M/D` with no leading zeros
pub fn format_label(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

impl fmt::Display for DateReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => write!(f, "TODAY"),
            Self::Yesterday => write!(f, "YESTERDAY"),
            Self::Tomorrow => write!(f, "TOMORROW"),
            Self::Label(label) => write!(f, "{}", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_descriptors_case_insensitive() {
        assert_eq!(DateReference::parse("today"), DateReference::Today);
        assert_eq!(DateReference::parse("Yesterday"), DateReference::Yesterday);
        assert_eq!(DateReference::parse("TOMORROW"), DateReference::Tomorrow);
        assert_eq!(
            DateReference::parse(" 7/14 "),
            DateReference::Label("7/14".into())
        );
    }

    #[test]
    fn test_format_label_has_no_leading_zeros() {
        assert_eq!(format_label(date(2019, 7, 4)), "7/4");
        assert_eq!(format_label(date(2019, 12, 25)), "12/25");
        assert_eq!(format_label(date(2019, 1, 9)), "1/9");
    }

    #[test]
    fn test_to_label_offsets() {
        let today = date(2019, 7, 4);
        assert_eq!(DateReference::Today.to_label(today), "7/4");
        assert_eq!(DateReference::Yesterday.to_label(today), "7/3");
        assert_eq!(DateReference::Tomorrow.to_label(today), "7/5");
        assert_eq!(DateReference::Label("6/30".into()).to_label(today), "6/30");
    }

    #[test]
    fn test_to_label_crosses_month_and_year() {
        assert_eq!(DateReference::Yesterday.to_label(date(2019, 8, 1)), "7/31");
        assert_eq!(DateReference::Tomorrow.to_label(date(2019, 12, 31)), "1/1");
    }
}
