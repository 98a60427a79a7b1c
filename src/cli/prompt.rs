//! Interactive category prompt
//!
//! Generic over the reader and writer so the menu can be driven from tests.

use std::io::{BufRead, Write};

use crate::display::format_category_menu;
use crate::error::{FoodError, FoodResult};
use crate::models::MealCategory;

/// Show the numbered menu and read a choice, re-prompting on bad input
pub fn prompt_meal_category<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> FoodResult<MealCategory> {
    writeln!(output, "{}", format_category_menu())?;

    loop {
        write!(output, "Select meal type: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(FoodError::Validation("No meal type selected".into()));
        }

        match MealCategory::parse(&line) {
            Some(category) => return Ok(category),
            None => writeln!(
                output,
                "Invalid choice '{}'. Enter a number from 1 to {}.",
                line.trim(),
                MealCategory::ALL.len()
            )?,
        }
    }
}
