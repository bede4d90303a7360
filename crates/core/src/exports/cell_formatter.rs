//! Formats cell values for the write payload.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use log::warn;
use std::fmt::{self, Write};

use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_DATETIME_FORMAT};
use crate::fields::CellValue;

use super::export_model::SheetConfig;

/// Time zone timestamps are shown in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayZone {
    Local,
    Named(Tz),
}

impl DisplayZone {
    /// Parses an IANA zone name. Unknown names fall back to the local zone.
    pub fn from_setting(timezone: Option<&str>) -> Self {
        match timezone {
            None => DisplayZone::Local,
            Some(name) => match name.parse::<Tz>() {
                Ok(tz) => DisplayZone::Named(tz),
                Err(_) => {
                    warn!("Unknown timezone '{}', using local time", name);
                    DisplayZone::Local
                }
            },
        }
    }
}

/// Cell formatting rules of one sheet.
#[derive(Debug, Clone)]
pub struct CellFormatter {
    date_format: Option<String>,
    datetime_format: Option<String>,
    zone: DisplayZone,
}

impl CellFormatter {
    pub fn new(
        date_format: Option<String>,
        datetime_format: Option<String>,
        zone: DisplayZone,
    ) -> Self {
        Self {
            date_format,
            datetime_format,
            zone,
        }
    }

    pub fn for_sheet(config: &SheetConfig) -> Self {
        Self::new(
            config.date_format.clone(),
            config.datetime_format.clone(),
            DisplayZone::from_setting(config.timezone.as_deref()),
        )
    }

    /// Converts a field value into a payload cell.
    pub fn format(&self, value: &CellValue) -> serde_json::Value {
        use serde_json::Value;

        match value {
            CellValue::Null => Value::String(String::new()),
            CellValue::Date(date) => Value::String(self.format_date(date)),
            CellValue::DateTime(timestamp) => Value::String(self.format_datetime(timestamp)),
            CellValue::Map(_) | CellValue::List(_) => Value::String(value.to_json().to_string()),
            CellValue::Decimal(decimal) => CellValue::decimal_to_json_number(decimal),
            CellValue::Uuid(id) => Value::String(id.hyphenated().to_string()),
            CellValue::Bool(b) => Value::Bool(*b),
            CellValue::Int(i) => Value::from(*i),
            CellValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(String::new())),
            CellValue::Text(text) => Value::String(text.clone()),
        }
    }

    pub fn format_date(&self, date: &NaiveDate) -> String {
        let pattern = self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT);
        let items = pattern_items(pattern);
        render(date.format_with_items(items.iter()))
            .unwrap_or_else(|| date.format(DEFAULT_DATE_FORMAT).to_string())
    }

    pub fn format_datetime(&self, timestamp: &DateTime<Utc>) -> String {
        let pattern = self
            .datetime_format
            .as_deref()
            .unwrap_or(DEFAULT_DATETIME_FORMAT);
        match self.zone {
            DisplayZone::Local => format_in_zone(timestamp.with_timezone(&Local), pattern),
            DisplayZone::Named(tz) => format_in_zone(timestamp.with_timezone(&tz), pattern),
        }
    }

    /// Formats a freshness timestamp for a metadata row.
    ///
    /// Without a configured datetime pattern this is RFC 3339 in the display
    /// zone rather than the default cell pattern.
    pub fn format_timestamp(&self, timestamp: &DateTime<Utc>) -> String {
        if self.datetime_format.is_some() {
            return self.format_datetime(timestamp);
        }
        match self.zone {
            DisplayZone::Local => timestamp.with_timezone(&Local).to_rfc3339(),
            DisplayZone::Named(tz) => timestamp.with_timezone(&tz).to_rfc3339(),
        }
    }
}

fn format_in_zone<Z>(timestamp: DateTime<Z>, pattern: &str) -> String
where
    Z: TimeZone,
    Z::Offset: fmt::Display,
{
    let items = pattern_items(pattern);
    render(timestamp.format_with_items(items.iter()))
        .unwrap_or_else(|| timestamp.format(DEFAULT_DATETIME_FORMAT).to_string())
}

/// Parsed strftime items. An unparsable pattern yields a lone `Item::Error`
/// so rendering fails and the caller's default applies.
fn pattern_items(pattern: &str) -> Vec<Item<'_>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        warn!("Invalid date pattern '{}', using default", pattern);
        return vec![Item::Error];
    }
    items
}

// Renders without panicking on patterns that need fields the value lacks.
fn render(formatted: impl fmt::Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).ok()?;
    Some(out)
}
