//! Builds the full write payload of a sheet.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::constants::{BLANK_BLOCK_COLUMNS, BLANK_BLOCK_ROWS};
use crate::entities::ByEntity;
use crate::errors::Result;

use super::anchor_locator::locate_anchors;
use super::cell_formatter::CellFormatter;
use super::export_model::{
    AnchorSet, Grid, MetadataKind, ProjectedRow, SheetConfig, SheetPayload,
};
use super::field_resolver::{resolve_elements, ExportRoot};
use super::filters::matches_filters;
use super::metadata::{render_entity_updates_row, render_last_update_row};
use super::row_projector::project_row;

/// Preserved rows up to and including the header, then the projected rows,
/// then a blank block wide and tall enough to wipe a previously longer data
/// region.
///
/// Preserved cells are sent as null so the remote cell, formula included, is
/// left untouched. Only the rendered metadata row overwrites content above
/// the data region.
pub fn assemble_payload(
    grid: &Grid,
    anchors: &AnchorSet,
    metadata_row: Option<ProjectedRow>,
    rows: Vec<ProjectedRow>,
) -> Vec<ProjectedRow> {
    let metadata_index = anchors.metadata.map(|anchor| anchor.row);
    let mut metadata_row = metadata_row;

    let mut payload: Vec<ProjectedRow> = Vec::with_capacity(anchors.header_row + 1);
    for (index, row) in grid.iter().take(anchors.header_row + 1).enumerate() {
        let rendered = if metadata_index == Some(index) {
            metadata_row.take()
        } else {
            None
        };
        payload.push(rendered.unwrap_or_else(|| vec![Value::Null; row.len()]));
    }

    payload.extend(rows);
    payload.extend(
        std::iter::repeat_with(|| vec![Value::String(String::new()); BLANK_BLOCK_COLUMNS])
            .take(BLANK_BLOCK_ROWS),
    );
    payload
}

/// Computes the payload of one sheet from a freshly read grid.
///
/// Fails with `NoHeadersFound` when the grid has no header row; nothing must
/// be written in that case.
pub fn build_sheet_payload(
    grid: &Grid,
    root: &ExportRoot<'_>,
    config: &SheetConfig,
    last_update: Option<&ByEntity<DateTime<Utc>>>,
    now: &DateTime<Utc>,
) -> Result<SheetPayload> {
    let anchors = locate_anchors(grid, last_update.is_some(), &config.range)?;
    let formatter = CellFormatter::for_sheet(config);

    let metadata_row = anchors.metadata.and_then(|anchor| match anchor.kind {
        MetadataKind::LastUpdate => Some(render_last_update_row(
            &grid[anchor.row],
            anchor.column,
            now,
            &formatter,
        )),
        MetadataKind::EntityUpdates => last_update
            .map(|updates| render_entity_updates_row(anchor.column, updates, &formatter)),
    });

    let rows: Vec<ProjectedRow> = resolve_elements(root, &config.field_paths)
        .iter()
        .filter(|element| matches_filters(&element.fields, &config.filters))
        .map(|element| project_row(element, &anchors.header_columns, &formatter))
        .collect();

    let data_rows = rows.len();
    Ok(SheetPayload {
        rows: assemble_payload(grid, &anchors, metadata_row, rows),
        data_rows,
    })
}
