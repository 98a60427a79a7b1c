//! Entry models: what gets written into a dated row
//!
//! The column layout is a fixed contract with the sheet. Each entry kind owns
//! a three-column block; the blocks never overlap.

use serde_json::Value;
use std::fmt;

use super::Money;
use crate::error::FoodError;

/// A contiguous block of columns on a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: char,
    pub end: char,
}

impl ColumnSpan {
    pub const fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    /// Number of columns covered
    pub fn width(&self) -> u32 {
        (self.end as u32) - (self.start as u32) + 1
    }

    /// Whether two spans share any column
    pub fn overlaps(&self, other: &ColumnSpan) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// A1 range for this span on one row, e.g. `C12:E12`
    pub fn range_for_row(&self, row: u32) -> String {
        format!("{}{}:{}{}", self.start, row, self.end, row)
    }
}

/// Name, amount, category of the lunch entry
pub const LUNCH_COLUMNS: ColumnSpan = ColumnSpan::new('C', 'E');
/// Name, amount, category of the dinner entry
pub const DINNER_COLUMNS: ColumnSpan = ColumnSpan::new('F', 'H');
/// Store, (unused), amount of the shopping entry
pub const SHOPPING_COLUMNS: ColumnSpan = ColumnSpan::new('I', 'K');

/// Which meal slot of the day an entry fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealKind {
    Lunch,
    Dinner,
}

impl MealKind {
    pub fn columns(&self) -> ColumnSpan {
        match self {
            Self::Lunch => LUNCH_COLUMNS,
            Self::Dinner => DINNER_COLUMNS,
        }
    }
}

impl fmt::Display for MealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lunch => write!(f, "Lunch"),
            Self::Dinner => write!(f, "Dinner"),
        }
    }
}

/// Entry type as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Meal(MealKind),
    Shopping,
}

impl EntryKind {
    /// Parse an entry type (case-insensitive)
    pub fn parse(s: &str) -> Result<Self, FoodError> {
        match s.trim().to_uppercase().as_str() {
            "LUNCH" => Ok(Self::Meal(MealKind::Lunch)),
            "DINNER" => Ok(Self::Meal(MealKind::Dinner)),
            "SHOPPING" => Ok(Self::Shopping),
            _ => Err(FoodError::InvalidEntryKind(s.to_string())),
        }
    }

    pub fn is_meal(&self) -> bool {
        matches!(self, Self::Meal(_))
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meal(meal) => write!(f, "{}", meal),
            Self::Shopping => write!(f, "Shopping"),
        }
    }
}

/// How a meal was sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealCategory {
    Restaurant,
    CookedHome,
    Free,
}

impl MealCategory {
    /// All categories, in menu order
    pub const ALL: [MealCategory; 3] = [Self::Restaurant, Self::CookedHome, Self::Free];

    /// Label written into the sheet
    pub fn label(&self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::CookedHome => "Cooked/Home",
            Self::Free => "Free",
        }
    }

    /// Parse a category from its label or its 1-based menu number
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        match s.to_lowercase().as_str() {
            "restaurant" => Some(Self::Restaurant),
            "cooked/home" | "cooked" | "home" => Some(Self::CookedHome),
            "free" => Some(Self::Free),
            _ => None,
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A lunch or dinner expense
#[derive(Debug, Clone, PartialEq)]
pub struct MealEntry {
    pub kind: MealKind,
    pub name: String,
    pub amount: Money,
    pub category: MealCategory,
}

impl MealEntry {
    pub fn new(kind: MealKind, name: impl Into<String>, amount: Money, category: MealCategory) -> Self {
        Self {
            kind,
            name: name.into(),
            amount,
            category,
        }
    }

    /// Cell values in column order: name, amount, category
    pub fn row_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.name.clone()),
            Value::from(self.amount.to_f64()),
            Value::from(self.category.label()),
        ]
    }
}

/// A grocery or other shopping expense
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingEntry {
    pub store: String,
    pub amount: Money,
}

impl ShoppingEntry {
    pub fn new(store: impl Into<String>, amount: Money) -> Self {
        Self {
            store: store.into(),
            amount,
        }
    }

    /// Cell values in column order: store, empty, amount
    pub fn row_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.store.clone()),
            Value::Null,
            Value::from(self.amount.to_f64()),
        ]
    }
}
