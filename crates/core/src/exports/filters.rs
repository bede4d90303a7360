//! Declarative equality filters over resolved elements.

use crate::fields::FieldMap;

use super::export_model::SheetFilter;

/// Whether an element passes every filter.
///
/// A field the element does not have, or a null field, never matches, so
/// the element is left out and the export continues.
pub fn matches_filters(fields: &FieldMap, filters: &[SheetFilter]) -> bool {
    filters.iter().all(|filter| {
        let mut segments = filter.field.split('.');
        let value = segments
            .next()
            .and_then(|first| fields.get(first))
            .and_then(|value| value.lookup(segments));

        value
            .and_then(|value| value.to_filter_string())
            .map(|value| filter.values.iter().any(|allowed| *allowed == value))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::CellValue;
    use rust_decimal_macros::dec;

    fn element(category: &str) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("category".to_string(), CellValue::Text(category.to_string()));
        fields.insert("shares".to_string(), CellValue::Decimal(dec!(10.0)));
        fields.insert("note".to_string(), CellValue::Null);
        fields
    }

    fn filter(field: &str, values: &[&str]) -> SheetFilter {
        SheetFilter {
            field: field.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_no_filters_always_match() {
        assert!(matches_filters(&element("fee"), &[]));
    }

    #[test]
    fn test_equality_filter_admits_allowed_values_only() {
        let filters = vec![filter("category", &["investment"])];

        assert!(matches_filters(&element("investment"), &filters));
        assert!(!matches_filters(&element("fee"), &filters));
    }

    #[test]
    fn test_filters_are_anded() {
        let filters = vec![
            filter("category", &["investment", "fee"]),
            filter("shares", &["5"]),
        ];
        assert!(!matches_filters(&element("investment"), &filters));

        let filters = vec![
            filter("category", &["investment", "fee"]),
            filter("shares", &["10"]),
        ];
        assert!(matches_filters(&element("fee"), &filters));
    }

    #[test]
    fn test_unresolvable_field_excludes_element() {
        assert!(!matches_filters(
            &element("investment"),
            &[filter("missing", &["x"])]
        ));
        assert!(!matches_filters(
            &element("investment"),
            &[filter("note", &["null", ""])]
        ));
    }

    #[test]
    fn test_dotted_filter_field_reads_nested_map() {
        let mut entity = FieldMap::new();
        entity.insert("id".to_string(), CellValue::Text("SEGO".to_string()));
        let mut fields = element("investment");
        fields.insert("entity".to_string(), CellValue::Map(entity));

        assert!(matches_filters(&fields, &[filter("entity.id", &["SEGO"])]));
        assert!(!matches_filters(&fields, &[filter("entity.id", &["MINTOS"])]));
    }
}
