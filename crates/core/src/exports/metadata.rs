//! Renders the freshness metadata row above the header.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::constants::ENTITY_UPDATES_TRAILING_BLANKS;
use crate::entities::ByEntity;

use super::cell_formatter::CellFormatter;
use super::export_model::ProjectedRow;

/// Writes `now` right of the marker and clears every other cell of the row
/// except the marker itself.
pub fn render_last_update_row(
    row: &[String],
    marker_column: usize,
    now: &DateTime<Utc>,
    formatter: &CellFormatter,
) -> ProjectedRow {
    let width = row.len().max(marker_column + 2);

    (0..width)
        .map(|column| {
            if column == marker_column {
                Value::String(row[marker_column].clone())
            } else if column == marker_column + 1 {
                Value::String(formatter.format_timestamp(now))
            } else {
                Value::String(String::new())
            }
        })
        .collect()
}

/// Rebuilds the per-entity timestamp row from scratch.
///
/// Cells left of the marker are blanked and the marker cell is sent as null
/// so the remote marker survives. Entity name / timestamp pairs follow,
/// most recent first. Entities with equal timestamps keep their input order.
pub fn render_entity_updates_row(
    marker_column: usize,
    last_update: &ByEntity<DateTime<Utc>>,
    formatter: &CellFormatter,
) -> ProjectedRow {
    let mut updates: Vec<_> = last_update.iter().collect();
    updates.sort_by(|a, b| b.1.cmp(a.1));

    let mut row: ProjectedRow = vec![Value::String(String::new()); marker_column];
    row.push(Value::Null);
    for (entity, updated_at) in updates {
        row.push(Value::String(entity.to_string()));
        row.push(Value::String(formatter.format_timestamp(updated_at)));
    }
    row.extend(std::iter::repeat(Value::String(String::new())).take(ENTITY_UPDATES_TRAILING_BLANKS));
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::FinancialEntity;
    use crate::exports::cell_formatter::DisplayZone;
    use chrono::TimeZone;
    use serde_json::json;

    fn formatter() -> CellFormatter {
        CellFormatter::new(
            None,
            Some("%Y-%m-%d %H:%M".to_string()),
            DisplayZone::Named(chrono_tz::UTC),
        )
    }

    #[test]
    fn test_last_update_row_keeps_only_marker_and_timestamp() {
        let row: Vec<String> = vec!["note", "last_update", "old", "stale", "x"]
            .into_iter()
            .map(String::from)
            .collect();
        let now = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 0).unwrap();

        let rendered = render_last_update_row(&row, 1, &now, &formatter());

        assert_eq!(
            rendered,
            vec![
                json!(""),
                json!("last_update"),
                json!("2024-05-06 07:08"),
                json!(""),
                json!("")
            ]
        );
    }

    #[test]
    fn test_last_update_row_grows_for_timestamp() {
        let row = vec![String::new(), "last_update".to_string()];
        let now = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 0).unwrap();

        let rendered = render_last_update_row(&row, 1, &now, &formatter());

        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[2], json!("2024-05-06 07:08"));
    }

    #[test]
    fn test_entity_updates_sorted_most_recent_first() {
        let mut last_update = ByEntity::new();
        last_update.insert(
            FinancialEntity::new("A", "Alpha"),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        last_update.insert(
            FinancialEntity::new("B", "Beta"),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        );
        last_update.insert(
            FinancialEntity::new("C", "Gamma"),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );

        let rendered = render_entity_updates_row(2, &last_update, &formatter());

        assert_eq!(
            &rendered[..9],
            &[
                json!(""),
                json!(""),
                serde_json::Value::Null,
                json!("Beta"),
                json!("2024-03-01 00:00"),
                json!("Alpha"),
                json!("2024-01-01 00:00"),
                json!("Gamma"),
                json!("2024-01-01 00:00"),
            ]
        );
        assert_eq!(rendered.len(), 9 + ENTITY_UPDATES_TRAILING_BLANKS);
        assert!(rendered[9..].iter().all(|cell| *cell == json!("")));
    }
}
