//! Sheets API client for reading and writing cell ranges.
//!
//! Uses the v4 `spreadsheets.values` REST endpoints.

use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Duration;

use finmirror_core::exports::{Grid, GridClientTrait, ProjectedRow};
use finmirror_core::settings::SheetsCredentials;

use crate::error::{Result, SheetsError};
use crate::types::*;

/// Public Sheets API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Message the service returns for a range naming a sheet that does not exist.
const UNPARSABLE_RANGE_MESSAGE: &str = "Unable to parse range";

/// Client for the Sheets values API.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    base_url: String,
}

impl SheetsClient {
    /// Create a new Sheets client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the API (e.g., "https://sheets.googleapis.com")
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create headers for an API request.
    fn headers(&self, token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| SheetsError::auth("Invalid access token format"))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    fn values_url(&self, spreadsheet_id: &str, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url,
            urlencoding::encode(spreadsheet_id),
            urlencoding::encode(range)
        )
    }

    /// Parse a JSON response body.
    ///
    /// 404, and 400 for a range naming an unknown sheet, become `NotFound`.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        target: &str,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        debug!("Sheets API response ({}): {} bytes", status, body.len());

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|error| error.error.message)
                .unwrap_or_else(|_| format!("Request failed: {}", body));
            return Err(classify_failure(status, message, target));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to deserialize Sheets response: {}", e);
            SheetsError::api(status.as_u16(), format!("Failed to parse response: {}", e))
        })
    }

    /// Read the formatted values of a range.
    ///
    /// GET /v4/spreadsheets/{spreadsheetId}/values/{range}
    pub async fn get_values(
        &self,
        token: &str,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<ValueRange> {
        let url = self.values_url(spreadsheet_id, range);
        debug!("Reading range {} of {}", range, spreadsheet_id);

        let response = self
            .client
            .get(&url)
            .headers(self.headers(token)?)
            .send()
            .await?;

        Self::parse_response(response, &target_name(spreadsheet_id, range)).await
    }

    /// Overwrite a range, parsing values as if typed by a user.
    ///
    /// PUT /v4/spreadsheets/{spreadsheetId}/values/{range}?valueInputOption=USER_ENTERED
    pub async fn update_values(
        &self,
        token: &str,
        spreadsheet_id: &str,
        range: &str,
        values: Vec<Vec<serde_json::Value>>,
    ) -> Result<UpdateValuesResponse> {
        let url = format!(
            "{}?valueInputOption=USER_ENTERED",
            self.values_url(spreadsheet_id, range)
        );
        debug!(
            "Writing {} rows to range {} of {}",
            values.len(),
            range,
            spreadsheet_id
        );

        let response = self
            .client
            .put(&url)
            .headers(self.headers(token)?)
            .json(&ValueRange::rows(range, values))
            .send()
            .await?;

        Self::parse_response(response, &target_name(spreadsheet_id, range)).await
    }
}

#[async_trait]
impl GridClientTrait for SheetsClient {
    async fn read_range(
        &self,
        credentials: &SheetsCredentials,
        spreadsheet_id: &str,
        range: &str,
    ) -> finmirror_core::Result<Grid> {
        let values = self
            .get_values(&credentials.access_token, spreadsheet_id, range)
            .await?;
        Ok(values.into_text_grid())
    }

    async fn write_range(
        &self,
        credentials: &SheetsCredentials,
        spreadsheet_id: &str,
        range: &str,
        rows: &[ProjectedRow],
    ) -> finmirror_core::Result<()> {
        let response = self
            .update_values(&credentials.access_token, spreadsheet_id, range, rows.to_vec())
            .await?;
        debug!(
            "Updated {} cells in {}",
            response.updated_cells.unwrap_or(0),
            response.updated_range.unwrap_or_default()
        );
        Ok(())
    }
}

fn target_name(spreadsheet_id: &str, range: &str) -> String {
    format!("{}/{}", spreadsheet_id, range)
}

fn classify_failure(status: StatusCode, message: String, target: &str) -> SheetsError {
    let missing = status == StatusCode::NOT_FOUND
        || (status == StatusCode::BAD_REQUEST && message.contains(UNPARSABLE_RANGE_MESSAGE));
    if missing {
        SheetsError::NotFound(format!("{}: {}", target, message))
    } else {
        SheetsError::api(status.as_u16(), message)
    }
}
