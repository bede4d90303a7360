//! Locates the metadata row and the header row of a fetched grid.

use crate::constants::{ENTITY_UPDATED_AT_MARKER, LAST_UPDATE_MARKER};
use crate::errors::{Error, Result};

use super::export_model::{AnchorSet, Grid, MetadataAnchor, MetadataKind};

/// Scans `grid` for the metadata marker and the header row beneath it.
///
/// The single timestamp marker always wins. The per-entity marker is only
/// looked for when the caller has per-entity timestamps to render. Without
/// any marker the header search starts at the first row.
pub fn locate_anchors(grid: &Grid, expects_entity_updates: bool, range: &str) -> Result<AnchorSet> {
    let metadata = find_marker(grid, LAST_UPDATE_MARKER)
        .map(|(row, column)| MetadataAnchor {
            row,
            column,
            kind: MetadataKind::LastUpdate,
        })
        .or_else(|| {
            if !expects_entity_updates {
                return None;
            }
            find_marker(grid, ENTITY_UPDATED_AT_MARKER).map(|(row, column)| MetadataAnchor {
                row,
                column,
                kind: MetadataKind::EntityUpdates,
            })
        });

    let search_start = metadata.map(|anchor| anchor.row + 1).unwrap_or(0);

    let (header_row, header) = grid
        .iter()
        .enumerate()
        .skip(search_start)
        .find(|(_, row)| !is_blank_row(row))
        .ok_or_else(|| Error::NoHeadersFound(range.to_string()))?;

    Ok(AnchorSet {
        metadata,
        header_row,
        header_columns: header.iter().map(|cell| cell.trim().to_string()).collect(),
    })
}

fn find_marker(grid: &Grid, marker: &str) -> Option<(usize, usize)> {
    grid.iter().enumerate().find_map(|(row_index, row)| {
        row.iter()
            .position(|cell| cell == marker)
            .map(|column| (row_index, column))
    })
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_header_is_first_row_without_marker() {
        let cells = grid(&[&["entity", " name ", "", "amount"], &["x", "y"]]);

        let anchors = locate_anchors(&cells, false, "Sheet").unwrap();

        assert_eq!(anchors.metadata, None);
        assert_eq!(anchors.header_row, 0);
        assert_eq!(anchors.header_columns, vec!["entity", "name", "", "amount"]);
    }

    #[test]
    fn test_header_follows_last_update_marker() {
        let cells = grid(&[
            &["=SUM(F4:F100)"],
            &["", "last_update", "old"],
            &[],
            &["", ""],
            &["name", "amount"],
        ]);

        let anchors = locate_anchors(&cells, false, "Sheet").unwrap();

        assert_eq!(
            anchors.metadata,
            Some(MetadataAnchor {
                row: 1,
                column: 1,
                kind: MetadataKind::LastUpdate,
            })
        );
        assert_eq!(anchors.header_row, 4);
        assert_eq!(anchors.header_columns, vec!["name", "amount"]);
    }

    #[test]
    fn test_entity_marker_only_when_expected() {
        let cells = grid(&[&["entity_updated_at"], &["name"]]);

        let ignored = locate_anchors(&cells, false, "Sheet").unwrap();
        assert_eq!(ignored.metadata, None);
        assert_eq!(ignored.header_row, 0);

        let found = locate_anchors(&cells, true, "Sheet").unwrap();
        assert_eq!(
            found.metadata.map(|anchor| anchor.kind),
            Some(MetadataKind::EntityUpdates)
        );
        assert_eq!(found.header_row, 1);
    }

    #[test]
    fn test_last_update_marker_wins_over_entity_marker() {
        let cells = grid(&[&["entity_updated_at"], &["last_update"], &["name"]]);

        let anchors = locate_anchors(&cells, true, "Sheet").unwrap();

        assert_eq!(
            anchors.metadata,
            Some(MetadataAnchor {
                row: 1,
                column: 0,
                kind: MetadataKind::LastUpdate,
            })
        );
        assert_eq!(anchors.header_row, 2);
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        let cells = grid(&[&["LAST_UPDATE"], &["name"]]);

        let anchors = locate_anchors(&cells, false, "Sheet").unwrap();

        assert_eq!(anchors.metadata, None);
        assert_eq!(anchors.header_row, 0);
    }

    #[test]
    fn test_missing_header_after_marker_fails() {
        let cells = grid(&[&["name"], &["last_update", "x"], &[""]]);

        let result = locate_anchors(&cells, false, "Positions");

        assert!(matches!(result, Err(Error::NoHeadersFound(range)) if range == "Positions"));
    }

    #[test]
    fn test_empty_grid_fails() {
        let result = locate_anchors(&Vec::new(), true, "Positions");
        assert!(matches!(result, Err(Error::NoHeadersFound(_))));
    }
}
