//! Resolves configured field paths into exportable elements.

use log::debug;

use crate::entities::{ByEntity, FinancialEntity};
use crate::fields::{CellValue, FieldAccess, FieldMap, FieldNode};

/// Root of an export: a single record, or records keyed by source entity.
pub enum ExportRoot<'a> {
    Single(&'a dyn FieldAccess),
    ByEntity(Vec<(&'a FinancialEntity, &'a dyn FieldAccess)>),
}

impl<'a> ExportRoot<'a> {
    pub fn single<T: FieldAccess>(record: &'a T) -> Self {
        ExportRoot::Single(record)
    }

    pub fn by_entity<T: FieldAccess>(records: &'a ByEntity<T>) -> Self {
        ExportRoot::ByEntity(
            records
                .iter()
                .map(|(entity, record)| (entity, record as &dyn FieldAccess))
                .collect(),
        )
    }
}

/// One element reached by a field path, flattened and ready to project.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedElement {
    pub entity: Option<FinancialEntity>,
    /// Originating field path. Only set for entity-keyed roots.
    pub type_tag: Option<String>,
    pub fields: FieldMap,
}

/// Walks every field path from the root and collects the elements found.
///
/// Keyed roots are visited entity by entity, each entity through every path
/// in order. A path that cannot be followed for an entity contributes
/// nothing for that entity and never stops the walk.
pub fn resolve_elements(root: &ExportRoot<'_>, field_paths: &[String]) -> Vec<ResolvedElement> {
    let mut elements = Vec::new();

    match root {
        ExportRoot::Single(record) => {
            for path in field_paths {
                match walk(*record, path) {
                    Some(node) => {
                        elements.extend(leaf_elements(node).into_iter().map(|fields| {
                            ResolvedElement {
                                entity: None,
                                type_tag: None,
                                fields,
                            }
                        }))
                    }
                    None => debug!("Field path '{}' not found, skipping", path),
                }
            }
        }
        ExportRoot::ByEntity(records) => {
            for (entity, record) in records {
                for path in field_paths {
                    match walk(*record, path) {
                        Some(node) => {
                            elements.extend(leaf_elements(node).into_iter().map(|fields| {
                                ResolvedElement {
                                    entity: Some((*entity).clone()),
                                    type_tag: Some(path.clone()),
                                    fields,
                                }
                            }))
                        }
                        None => debug!(
                            "Field path '{}' not found for entity {}, skipping",
                            path, entity.id
                        ),
                    }
                }
            }
        }
    }

    elements
}

/// Follows `path` one dot segment at a time. Records are asked for the named
/// field; map values fall back to key lookup.
fn walk<'a>(root: &'a dyn FieldAccess, path: &str) -> Option<FieldNode<'a>> {
    let mut node = FieldNode::Record(root);

    for segment in path.split('.').filter(|segment| !segment.is_empty()) {
        node = match node {
            FieldNode::Record(record) => record.try_get_field(segment)?,
            FieldNode::Value(CellValue::Map(mut map)) => match map.remove(segment)? {
                CellValue::Null => return None,
                value => FieldNode::Value(value),
            },
            FieldNode::Records(_) | FieldNode::Value(_) => return None,
        };
    }

    Some(node)
}

fn leaf_elements(node: FieldNode<'_>) -> Vec<FieldMap> {
    match node {
        FieldNode::Record(record) => vec![record.to_field_map()],
        FieldNode::Records(records) => records.iter().map(|record| record.to_field_map()).collect(),
        FieldNode::Value(CellValue::Map(map)) => vec![map],
        FieldNode::Value(CellValue::List(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                CellValue::Map(map) => Some(map),
                _ => None,
            })
            .collect(),
        FieldNode::Value(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positions::{GlobalPosition, Investments, StockDetail, StockInvestments};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    struct Ledger {
        label: String,
        rows: Vec<Row>,
        extra: BTreeMap<String, serde_json::Value>,
    }

    struct Row {
        category: String,
        amount: Decimal,
    }

    crate::field_record!(Ledger { label, rows, extra });
    crate::field_record!(Row { category, amount });

    fn ledger() -> Ledger {
        let mut extra = BTreeMap::new();
        extra.insert(
            "meta".to_string(),
            serde_json::json!({"items": [{"k": 1}, {"k": 2}, 3], "owner": {"name": "x"}}),
        );
        Ledger {
            label: "main".to_string(),
            rows: vec![
                Row {
                    category: "investment".to_string(),
                    amount: dec!(1),
                },
                Row {
                    category: "fee".to_string(),
                    amount: dec!(2),
                },
            ],
            extra,
        }
    }

    fn stock(name: &str) -> StockDetail {
        StockDetail {
            id: Uuid::nil(),
            name: name.to_string(),
            ticker: "T".to_string(),
            isin: "ISIN".to_string(),
            market: "XETRA".to_string(),
            shares: dec!(1),
            initial_investment: dec!(10),
            average_buy_price: dec!(10),
            market_value: dec!(11),
            currency: "EUR".to_string(),
            subtype: None,
        }
    }

    fn position(investments: Option<Investments>) -> GlobalPosition {
        GlobalPosition {
            id: Uuid::nil(),
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            account: None,
            investments,
        }
    }

    #[test]
    fn test_list_leaf_yields_every_element() {
        let ledger = ledger();
        let root = ExportRoot::single(&ledger);

        let elements = resolve_elements(&root, &["rows".to_string()]);

        assert_eq!(elements.len(), 2);
        assert_eq!(
            elements[0].fields.get("category"),
            Some(&CellValue::Text("investment".to_string()))
        );
        assert_eq!(elements[0].entity, None);
        assert_eq!(elements[0].type_tag, None);
    }

    #[test]
    fn test_key_access_into_map_values() {
        let ledger = ledger();
        let root = ExportRoot::single(&ledger);

        let items = resolve_elements(&root, &["extra.meta.items".to_string()]);
        // the scalar list item is not an element
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].fields.get("k"), Some(&CellValue::Int(2)));

        let owner = resolve_elements(&root, &["extra.meta.owner".to_string()]);
        assert_eq!(owner.len(), 1);
        assert_eq!(
            owner[0].fields.get("name"),
            Some(&CellValue::Text("x".to_string()))
        );
    }

    #[test]
    fn test_missing_segments_contribute_nothing() {
        let ledger = ledger();
        let root = ExportRoot::single(&ledger);

        let paths = vec![
            "missing".to_string(),
            "rows.category".to_string(),
            "label.deeper".to_string(),
            "rows".to_string(),
        ];
        let elements = resolve_elements(&root, &paths);

        assert_eq!(elements.len(), 2);
    }

    #[test]
    fn test_empty_path_is_root() {
        let ledger = ledger();
        let root = ExportRoot::single(&ledger);

        let elements = resolve_elements(&root, &[String::new()]);

        assert_eq!(elements.len(), 1);
        assert_eq!(
            elements[0].fields.get("label"),
            Some(&CellValue::Text("main".to_string()))
        );
    }

    #[test]
    fn test_keyed_root_tags_entity_and_path() {
        let mut positions = ByEntity::new();
        positions.insert(
            FinancialEntity::new("MY_INVESTOR", "MyInvestor"),
            position(Some(Investments {
                stocks: Some(StockInvestments {
                    investment: dec!(10),
                    market_value: dec!(11),
                    details: vec![stock("ACME"), stock("GLOBEX")],
                }),
                ..Default::default()
            })),
        );
        positions.insert(FinancialEntity::new("SEGO", "SEGO"), position(None));
        let root = ExportRoot::by_entity(&positions);

        let path = "investments.stocks.details".to_string();
        let elements = resolve_elements(&root, &[path.clone()]);

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].entity.as_ref().map(|e| e.id.as_str()), Some("MY_INVESTOR"));
        assert_eq!(elements[1].type_tag.as_deref(), Some(path.as_str()));
        assert_eq!(
            elements[1].fields.get("name"),
            Some(&CellValue::Text("GLOBEX".to_string()))
        );
    }

    #[test]
    fn test_record_missing_investments_yields_zero_rows() {
        let mut positions = ByEntity::new();
        positions.insert(FinancialEntity::new("SEGO", "SEGO"), position(None));
        let root = ExportRoot::by_entity(&positions);

        let elements = resolve_elements(&root, &["investments.sego.details".to_string()]);

        assert!(elements.is_empty());
    }

    #[test]
    fn test_empty_list_yields_nothing() {
        let mut positions = ByEntity::new();
        positions.insert(
            FinancialEntity::new("MY_INVESTOR", "MyInvestor"),
            position(Some(Investments {
                stocks: Some(StockInvestments {
                    investment: dec!(0),
                    market_value: dec!(0),
                    details: Vec::new(),
                }),
                ..Default::default()
            })),
        );
        let root = ExportRoot::by_entity(&positions);

        let elements = resolve_elements(&root, &["investments.stocks.details".to_string()]);

        assert!(elements.is_empty());
    }
}
