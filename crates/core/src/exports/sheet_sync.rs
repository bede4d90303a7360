//! Synchronizes a single configured sheet.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::entities::ByEntity;
use crate::errors::{Result, ValidationError};
use crate::settings::SheetsCredentials;

use super::export_model::SheetConfig;
use super::field_resolver::ExportRoot;
use super::grid_assembler::build_sheet_payload;
use super::grid_traits::GridClientTrait;

/// Reads a sheet, rebuilds its data region and writes it back in one call.
pub struct SheetSynchronizer<'a> {
    grid_client: &'a dyn GridClientTrait,
    credentials: &'a SheetsCredentials,
}

impl<'a> SheetSynchronizer<'a> {
    pub fn new(grid_client: &'a dyn GridClientTrait, credentials: &'a SheetsCredentials) -> Self {
        Self {
            grid_client,
            credentials,
        }
    }

    /// Returns the number of data rows written.
    ///
    /// Nothing is written when the grid has no header row; the
    /// `NoHeadersFound` error is returned instead.
    pub async fn sync(
        &self,
        config: &SheetConfig,
        root: &ExportRoot<'_>,
        last_update: Option<&ByEntity<DateTime<Utc>>>,
        now: &DateTime<Utc>,
    ) -> Result<usize> {
        validate_target(config)?;
        let grid = self
            .grid_client
            .read_range(self.credentials, &config.spreadsheet_id, &config.range)
            .await?;
        debug!(
            "Read {} rows from {}/{}",
            grid.len(),
            config.spreadsheet_id,
            config.range
        );

        let payload = build_sheet_payload(&grid, root, config, last_update, now)?;
        let write_range = format!("{}!A1", config.range);
        self.grid_client
            .write_range(
                self.credentials,
                &config.spreadsheet_id,
                &write_range,
                &payload.rows,
            )
            .await?;

        info!(
            "Exported {} rows to {} sheet {}",
            payload.data_rows, config.purpose, config.range
        );
        Ok(payload.data_rows)
    }
}

/// A sheet needs a spreadsheet and a range to be addressed at all.
fn validate_target(config: &SheetConfig) -> std::result::Result<(), ValidationError> {
    if config.spreadsheet_id.trim().is_empty() {
        return Err(ValidationError::MissingField("spreadsheetId".to_string()));
    }
    if config.range.trim().is_empty() {
        return Err(ValidationError::MissingField("range".to_string()));
    }
    Ok(())
}
