//! Export engine models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cells as read from a spreadsheet range. Rows may be ragged.
pub type Grid = Vec<Vec<String>>;

/// One row of the write payload.
///
/// `Value::Null` leaves the remote cell untouched; every other value
/// overwrites it.
pub type ProjectedRow = Vec<serde_json::Value>;

/// Record family mirrored by a configured sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SheetPurpose {
    Summary,
    Investments,
    Contributions,
    Transactions,
    Historic,
}

impl SheetPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetPurpose::Summary => "SUMMARY",
            SheetPurpose::Investments => "INVESTMENTS",
            SheetPurpose::Contributions => "CONTRIBUTIONS",
            SheetPurpose::Transactions => "TRANSACTIONS",
            SheetPurpose::Historic => "HISTORIC",
        }
    }
}

impl fmt::Display for SheetPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equality filter with its allowed values already stringified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetFilter {
    pub field: String,
    pub values: Vec<String>,
}

/// Fully resolved configuration of one sheet for one export run.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    pub purpose: SheetPurpose,
    pub spreadsheet_id: String,
    pub range: String,
    pub field_paths: Vec<String>,
    pub filters: Vec<SheetFilter>,
    pub date_format: Option<String>,
    pub datetime_format: Option<String>,
    pub timezone: Option<String>,
}

/// Write payload of one sheet and how many of its rows carry data.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPayload {
    pub rows: Vec<ProjectedRow>,
    pub data_rows: usize,
}

/// Which marker label identified the metadata row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataKind {
    /// A single shared timestamp next to the marker.
    LastUpdate,
    /// A table of per-entity timestamps starting at the marker.
    EntityUpdates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataAnchor {
    pub row: usize,
    pub column: usize,
    pub kind: MetadataKind,
}

/// Metadata and header positions discovered in a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorSet {
    pub metadata: Option<MetadataAnchor>,
    pub header_row: usize,
    pub header_columns: Vec<String>,
}

/// Result of synchronizing one sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SheetOutcome {
    Written { rows: usize },
    SkippedNoHeaders,
    TargetMissing { message: String },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetReport {
    pub purpose: SheetPurpose,
    pub spreadsheet_id: String,
    pub range: String,
    pub outcome: SheetOutcome,
}

/// Outcome of every sheet of a batch, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub sheets: Vec<SheetReport>,
}

impl ExportReport {
    pub fn written_count(&self) -> usize {
        self.sheets
            .iter()
            .filter(|sheet| matches!(sheet.outcome, SheetOutcome::Written { .. }))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.sheets.iter().any(|sheet| {
            matches!(
                sheet.outcome,
                SheetOutcome::TargetMissing { .. } | SheetOutcome::Failed { .. }
            )
        })
    }
}
