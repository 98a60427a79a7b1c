//! Google Sheets v4 client
//!
//! Blocking REST client for the `values` endpoints with bearer-token auth.
//! No retries: a failed call is terminal for the invocation.
//!
//! # API Endpoints
//!
//! - Batch read: `GET /v4/spreadsheets/{id}/values:batchGet?ranges=..&majorDimension=..`
//! - Read: `GET /v4/spreadsheets/{id}/values/{range}?majorDimension=..`
//! - Write: `PUT /v4/spreadsheets/{id}/values/{range}?valueInputOption=..`

use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Grid, MajorDimension, SheetStore, ValueInputOption};
use crate::error::{FoodError, FoodResult};

const BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct ValueRange {
    /// Absent when the range holds no data
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchGetResponse {
    #[serde(default)]
    value_ranges: Vec<ValueRange>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBody<'a> {
    range: &'a str,
    major_dimension: &'static str,
    values: Vec<Vec<Value>>,
}

/// Sheets API client bound to one spreadsheet
pub struct GoogleSheetsClient {
    client: Client,
    spreadsheet_id: String,
    access_token: String,
    base_url: String,
}

impl GoogleSheetsClient {
    pub fn new(spreadsheet_id: impl Into<String>, access_token: impl Into<String>) -> FoodResult<Self> {
        Self::with_base_url(spreadsheet_id, access_token, BASE_URL)
    }

    /// Point the client at another API root (e.g. a local proxy)
    pub fn with_base_url(
        spreadsheet_id: impl Into<String>,
        access_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> FoodResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FoodError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            spreadsheet_id: spreadsheet_id.into(),
            access_token: access_token.into(),
            base_url: base_url.into(),
        })
    }

    /// URL for `values/{range}` or `values:batchGet`, with the range path-encoded
    fn values_url(&self, range: Option<&str>) -> FoodResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FoodError::Config(format!("Invalid API URL '{}': {}", self.base_url, e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FoodError::Config(format!("Invalid API URL '{}'", self.base_url)))?;
            segments.pop_if_empty().push(&self.spreadsheet_id);
            match range {
                Some(range) => {
                    segments.push("values").push(range);
                }
                None => {
                    segments.push("values:batchGet");
                }
            }
        }
        Ok(url)
    }

    fn check_status(response: Response, to_error: fn(String) -> FoodError) -> FoodResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(to_error(format!("HTTP {}: {}", status, body.trim())))
    }
}

impl SheetStore for GoogleSheetsClient {
    fn batch_read(&self, ranges: &[String], dimension: MajorDimension) -> FoodResult<Vec<Grid>> {
        debug!("Sheets batchGet {:?} ({})", ranges, dimension.as_str());

        let mut query: Vec<(&str, &str)> = ranges.iter().map(|r| ("ranges", r.as_str())).collect();
        query.push(("majorDimension", dimension.as_str()));

        let response = self
            .client
            .get(self.values_url(None)?)
            .bearer_auth(&self.access_token)
            .query(&query)
            .send()
            .map_err(|e| FoodError::RemoteRead(e.to_string()))?;

        let body: BatchGetResponse = Self::check_status(response, FoodError::RemoteRead)?
            .json()
            .map_err(|e| FoodError::RemoteRead(format!("Failed to parse response: {}", e)))?;

        if body.value_ranges.len() != ranges.len() {
            return Err(FoodError::RemoteRead(format!(
                "Expected {} ranges, got {}",
                ranges.len(),
                body.value_ranges.len()
            )));
        }

        Ok(body.value_ranges.into_iter().map(|vr| vr.values).collect())
    }

    fn read(&self, range: &str, dimension: MajorDimension) -> FoodResult<Grid> {
        debug!("Sheets get {} ({})", range, dimension.as_str());

        let response = self
            .client
            .get(self.values_url(Some(range))?)
            .bearer_auth(&self.access_token)
            .query(&[("majorDimension", dimension.as_str())])
            .send()
            .map_err(|e| FoodError::RemoteRead(e.to_string()))?;

        let body: ValueRange = Self::check_status(response, FoodError::RemoteRead)?
            .json()
            .map_err(|e| FoodError::RemoteRead(format!("Failed to parse response: {}", e)))?;

        Ok(body.values)
    }

    fn write(&self, range: &str, values: Vec<Vec<Value>>, input: ValueInputOption) -> FoodResult<()> {
        debug!("Sheets update {} ({})", range, input.as_str());

        let body = UpdateBody {
            range,
            major_dimension: MajorDimension::Rows.as_str(),
            values,
        };

        let response = self
            .client
            .put(self.values_url(Some(range))?)
            .bearer_auth(&self.access_token)
            .query(&[("valueInputOption", input.as_str())])
            .json(&body)
            .send()
            .map_err(|e| FoodError::RemoteWrite(e.to_string()))?;

        Self::check_status(response, FoodError::RemoteWrite)?;
        Ok(())
    }
}
