//! Access token lookup
//!
//! Obtaining and refreshing OAuth tokens happens outside this tool. A token is
//! taken from `FOOD_TRACKER_TOKEN`, or from the `access_token` field of the
//! stored token file.

use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::{FoodError, FoodResult};

/// Environment variable holding a bearer token
pub const TOKEN_ENV_VAR: &str = "FOOD_TRACKER_TOKEN";

#[derive(Debug, Deserialize)]
struct StoredToken {
    access_token: String,
}

/// Find a bearer token for the Sheets API
pub fn load_access_token(token_file: &Path) -> FoodResult<String> {
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        if !token.trim().is_empty() {
            info!("Using access token from {}", TOKEN_ENV_VAR);
            return Ok(token.trim().to_string());
        }
    }
    read_token_file(token_file)
}

fn read_token_file(token_file: &Path) -> FoodResult<String> {
    if !token_file.exists() {
        return Err(FoodError::Auth(format!(
            "No access token: set {} or create {}",
            TOKEN_ENV_VAR,
            token_file.display()
        )));
    }

    let contents = std::fs::read_to_string(token_file)
        .map_err(|e| FoodError::Auth(format!("Failed to read {}: {}", token_file.display(), e)))?;
    let stored: StoredToken = serde_json::from_str(&contents)
        .map_err(|e| FoodError::Auth(format!("Failed to parse {}: {}", token_file.display(), e)))?;

    if stored.access_token.trim().is_empty() {
        return Err(FoodError::Auth(format!(
            "{} has an empty access_token",
            token_file.display()
        )));
    }

    info!("Using access token from {}", token_file.display());
    Ok(stored.access_token)
}
