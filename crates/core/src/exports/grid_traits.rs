//! Port to the remote spreadsheet service.

use async_trait::async_trait;

use crate::errors::Result;
use crate::settings::SheetsCredentials;

use super::export_model::{Grid, ProjectedRow};

/// Reads and writes rectangular cell ranges of a remote spreadsheet.
///
/// A spreadsheet or range that does not exist must surface as
/// `Error::ExportTargetMissing`; any other failure as `Error::Transport`.
#[async_trait]
pub trait GridClientTrait: Send + Sync {
    /// Current cell values of `range`, rows possibly ragged.
    async fn read_range(
        &self,
        credentials: &SheetsCredentials,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Grid>;

    /// Writes `rows` starting at the top-left cell of `range`.
    ///
    /// Null cells must leave the remote value untouched.
    async fn write_range(
        &self,
        credentials: &SheetsCredentials,
        spreadsheet_id: &str,
        range: &str,
        rows: &[ProjectedRow],
    ) -> Result<()>;
}
