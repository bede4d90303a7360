//! Service trait for spreadsheet exports.

use async_trait::async_trait;

use crate::errors::Result;

use super::export_model::ExportReport;

/// Trait for spreadsheet export operations
#[async_trait]
pub trait SheetsExportServiceTrait: Send + Sync {
    /// Runs one export batch over every configured sheet.
    ///
    /// Fails with `ExecutionConflict` while another batch is running.
    async fn export(&self) -> Result<ExportReport>;
}
