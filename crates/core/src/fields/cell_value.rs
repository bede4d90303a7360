//! Typed leaf values produced by flattening domain records.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Shallow name → value view of one record.
pub type FieldMap = BTreeMap<String, CellValue>;

/// A single field value as seen by the export engine.
///
/// Calendar dates and timestamps are kept apart so the formatter can apply
/// the date or the datetime pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Uuid(Uuid),
    Map(FieldMap),
    List(Vec<CellValue>),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Walks nested map values by key. Returns `None` as soon as a segment
    /// is missing or the current value is not a map.
    pub fn lookup<'a, I>(&self, segments: I) -> Option<&CellValue>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = self;
        for segment in segments {
            current = match current {
                CellValue::Map(map) => map.get(segment)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// String form used when comparing against filter values.
    ///
    /// Null has no string form, so a null field never matches a filter.
    pub fn to_filter_string(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Int(i) => Some(i.to_string()),
            CellValue::Float(f) => Some(f.to_string()),
            CellValue::Decimal(d) => Some(d.normalize().to_string()),
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            CellValue::DateTime(dt) => Some(dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            CellValue::Uuid(id) => Some(id.hyphenated().to_string()),
            CellValue::Map(_) | CellValue::List(_) => Some(self.to_json().to_string()),
        }
    }

    /// JSON form used when a structured value lands in a single cell.
    ///
    /// Decimals are written as strings here to keep their exact digits.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;

        match self {
            CellValue::Null => Value::Null,
            CellValue::Bool(b) => Value::Bool(*b),
            CellValue::Int(i) => Value::from(*i),
            CellValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            CellValue::Decimal(d) => Value::String(d.normalize().to_string()),
            CellValue::Text(s) => Value::String(s.clone()),
            CellValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            CellValue::DateTime(dt) => {
                Value::String(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            CellValue::Uuid(id) => Value::String(id.hyphenated().to_string()),
            CellValue::Map(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            CellValue::List(items) => Value::Array(items.iter().map(CellValue::to_json).collect()),
        }
    }

    /// Decimal as a spreadsheet number. Values outside the f64 range become null.
    pub fn decimal_to_json_number(value: &Decimal) -> serde_json::Value {
        value
            .to_f64()
            .and_then(serde_json::Number::from_f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => n.as_f64().map(CellValue::Float).unwrap_or(CellValue::Null),
            },
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Array(items) => CellValue::List(items.iter().map(CellValue::from).collect()),
            Value::Object(map) => CellValue::Map(
                map.iter()
                    .map(|(key, value)| (key.clone(), CellValue::from(value)))
                    .collect(),
            ),
        }
    }
}
