//! Projects resolved elements onto the discovered header columns.

use crate::constants::{ENTITY_COLUMN, ENTITY_NAME_FIELD, TYPE_COLUMN};
use crate::fields::{CellValue, FieldMap};

use super::cell_formatter::CellFormatter;
use super::export_model::ProjectedRow;
use super::field_resolver::ResolvedElement;

/// Builds one payload row with a cell per header column, in header order.
///
/// Columns without a matching field produce an empty cell. A dotted column
/// name is looked up through nested map values.
pub fn project_row(
    element: &ResolvedElement,
    columns: &[String],
    formatter: &CellFormatter,
) -> ProjectedRow {
    let fields = with_synthetic_fields(element);

    columns
        .iter()
        .map(|column| {
            if let Some(value) = fields.get(column) {
                return formatter.format(value);
            }
            if column.contains('.') {
                let mut segments = column.split('.');
                let nested = segments
                    .next()
                    .and_then(|first| fields.get(first))
                    .and_then(|value| value.lookup(segments));
                if let Some(value) = nested {
                    return formatter.format(value);
                }
            }
            serde_json::Value::String(String::new())
        })
        .collect()
}

/// Upper-cased product name of a field path, e.g. `investments.stocks.details`
/// becomes `STOCKS`.
pub fn format_type_name(field_path: &str) -> String {
    let tokens: Vec<&str> = field_path.split('.').collect();
    if tokens.len() >= 2 {
        tokens[tokens.len() - 2].to_uppercase()
    } else {
        field_path.to_uppercase()
    }
}

fn with_synthetic_fields(element: &ResolvedElement) -> FieldMap {
    let mut fields = element.fields.clone();

    let entity_value = match fields.get(ENTITY_COLUMN) {
        None => Some(
            element
                .entity
                .as_ref()
                .map(|entity| CellValue::Text(entity.to_string()))
                .unwrap_or(CellValue::Null),
        ),
        Some(CellValue::Map(entity)) => Some(
            entity
                .get(ENTITY_NAME_FIELD)
                .cloned()
                .unwrap_or(CellValue::Null),
        ),
        Some(_) => None,
    };
    if let Some(value) = entity_value {
        fields.insert(ENTITY_COLUMN.to_string(), value);
    }

    if let Some(path) = &element.type_tag {
        fields.insert(
            TYPE_COLUMN.to_string(),
            CellValue::Text(format_type_name(path)),
        );
    }

    fields
}
