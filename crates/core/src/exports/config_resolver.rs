//! Merges shared globals into per-sheet settings entries.

use crate::constants::{DETAILS_FIELD, HISTORIC_ENTRIES_FIELD};
use crate::settings::{GlobalsConfig, SheetConfigEntry};

use super::export_model::{SheetConfig, SheetFilter, SheetPurpose};

/// Fills every unset field of each entry with the matching global value.
///
/// Fields the entry sets itself are never overwritten. The input is left
/// untouched.
pub fn apply_global_config(
    globals: &GlobalsConfig,
    entries: &[SheetConfigEntry],
) -> Vec<SheetConfigEntry> {
    entries
        .iter()
        .map(|entry| SheetConfigEntry {
            spreadsheet_id: entry
                .spreadsheet_id
                .clone()
                .or_else(|| Some(globals.spreadsheet_id.clone())),
            datetime_format: entry
                .datetime_format
                .clone()
                .or_else(|| globals.datetime_format.clone()),
            date_format: entry
                .date_format
                .clone()
                .or_else(|| globals.date_format.clone()),
            timezone: entry.timezone.clone().or_else(|| globals.timezone.clone()),
            ..entry.clone()
        })
        .collect()
}

/// Builds the immutable per-run configuration of every sheet of a purpose.
pub fn resolve_sheet_configs(
    globals: &GlobalsConfig,
    entries: &[SheetConfigEntry],
    purpose: SheetPurpose,
) -> Vec<SheetConfig> {
    apply_global_config(globals, entries)
        .into_iter()
        .map(|entry| {
            let field_paths = field_paths_for(purpose, entry.data.to_vec());
            let filters = entry
                .filters
                .unwrap_or_default()
                .into_iter()
                .map(|filter| SheetFilter {
                    field: filter.field,
                    values: filter.values.to_vec().iter().map(filter_value).collect(),
                })
                .collect();

            SheetConfig {
                purpose,
                spreadsheet_id: entry.spreadsheet_id.unwrap_or_default(),
                range: entry.range,
                field_paths,
                filters,
                date_format: entry.date_format,
                datetime_format: entry.datetime_format,
                timezone: entry.timezone,
            }
        })
        .collect()
}

fn field_paths_for(purpose: SheetPurpose, data: Vec<String>) -> Vec<String> {
    match purpose {
        SheetPurpose::Investments => data
            .into_iter()
            .map(|product| format!("investments.{}.{}", product, DETAILS_FIELD))
            .collect(),
        SheetPurpose::Historic => vec![HISTORIC_ENTRIES_FIELD.to_string()],
        // An empty path mirrors the root record itself.
        SheetPurpose::Summary if data.is_empty() => vec![String::new()],
        SheetPurpose::Summary | SheetPurpose::Contributions | SheetPurpose::Transactions => data,
    }
}

fn filter_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{FilterConfig, OneOrMany};

    fn globals() -> GlobalsConfig {
        GlobalsConfig {
            spreadsheet_id: "global-sheet".to_string(),
            datetime_format: Some("%d/%m/%Y %H:%M".to_string()),
            date_format: Some("%d/%m/%Y".to_string()),
            timezone: None,
        }
    }

    #[test]
    fn test_unset_fields_inherit_globals() {
        let entries = vec![SheetConfigEntry {
            range: "Txs".to_string(),
            ..Default::default()
        }];

        let merged = apply_global_config(&globals(), &entries);

        assert_eq!(merged[0].spreadsheet_id.as_deref(), Some("global-sheet"));
        assert_eq!(merged[0].date_format.as_deref(), Some("%d/%m/%Y"));
        assert_eq!(merged[0].datetime_format.as_deref(), Some("%d/%m/%Y %H:%M"));
        assert_eq!(merged[0].timezone, None);
        // input untouched
        assert_eq!(entries[0].spreadsheet_id, None);
    }

    #[test]
    fn test_set_fields_are_never_overwritten() {
        let entries = vec![SheetConfigEntry {
            range: "Txs".to_string(),
            spreadsheet_id: Some("own-sheet".to_string()),
            date_format: Some("%Y-%m-%d".to_string()),
            ..Default::default()
        }];

        let merged = apply_global_config(&globals(), &entries);

        assert_eq!(merged[0].spreadsheet_id.as_deref(), Some("own-sheet"));
        assert_eq!(merged[0].date_format.as_deref(), Some("%Y-%m-%d"));
        assert_eq!(merged[0].datetime_format.as_deref(), Some("%d/%m/%Y %H:%M"));
    }

    #[test]
    fn test_investment_paths_point_at_details() {
        let entries = vec![SheetConfigEntry {
            range: "Stocks".to_string(),
            data: OneOrMany::Many(vec!["stocks".to_string(), "funds".to_string()]),
            ..Default::default()
        }];

        let configs = resolve_sheet_configs(&globals(), &entries, SheetPurpose::Investments);

        assert_eq!(
            configs[0].field_paths,
            vec!["investments.stocks.details", "investments.funds.details"]
        );
        assert_eq!(configs[0].purpose, SheetPurpose::Investments);
    }

    #[test]
    fn test_historic_and_summary_paths() {
        let entries = vec![SheetConfigEntry {
            range: "Sheet".to_string(),
            ..Default::default()
        }];

        let historic = resolve_sheet_configs(&globals(), &entries, SheetPurpose::Historic);
        assert_eq!(historic[0].field_paths, vec!["entries"]);

        let summary = resolve_sheet_configs(&globals(), &entries, SheetPurpose::Summary);
        assert_eq!(summary[0].field_paths, vec![""]);
    }

    #[test]
    fn test_filter_values_are_stringified() {
        let entries = vec![SheetConfigEntry {
            range: "Txs".to_string(),
            data: OneOrMany::One("investment".to_string()),
            filters: Some(vec![FilterConfig {
                field: "shares".to_string(),
                values: OneOrMany::Many(vec![serde_json::json!(10), serde_json::json!("x")]),
            }]),
            ..Default::default()
        }];

        let configs = resolve_sheet_configs(&globals(), &entries, SheetPurpose::Transactions);

        assert_eq!(configs[0].field_paths, vec!["investment"]);
        assert_eq!(
            configs[0].filters,
            vec![SheetFilter {
                field: "shares".to_string(),
                values: vec!["10".to_string(), "x".to_string()],
            }]
        );
    }
}
