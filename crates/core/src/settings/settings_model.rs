//! Export settings models.

use serde::{Deserialize, Serialize};

/// A settings value that may be written as a single item or a list.
///
/// `Many` is tried first so a list of JSON values is never read as a single
/// array value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T: Clone> OneOrMany<T> {
    pub fn to_vec(&self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value.clone()],
            OneOrMany::Many(values) => values.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub integrations: IntegrationsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    pub sheets: Option<SheetsExportConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationsConfig {
    pub sheets: Option<SheetsIntegration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetsIntegration {
    pub credentials: Option<SheetsCredentials>,
}

/// Credentials handed to the grid adapter on every call.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetsCredentials {
    pub access_token: String,
}

impl std::fmt::Debug for SheetsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsCredentials")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Values shared by every sheet entry unless the entry sets its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalsConfig {
    pub spreadsheet_id: String,
    pub datetime_format: Option<String>,
    pub date_format: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    pub field: String,
    pub values: OneOrMany<serde_json::Value>,
}

/// One configured sheet, as written in the settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetConfigEntry {
    pub range: String,
    pub spreadsheet_id: Option<String>,
    pub datetime_format: Option<String>,
    pub date_format: Option<String>,
    pub timezone: Option<String>,
    #[serde(default)]
    pub data: OneOrMany<String>,
    pub filters: Option<Vec<FilterConfig>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetsExportConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub globals: GlobalsConfig,
    #[serde(default)]
    pub summary: Vec<SheetConfigEntry>,
    #[serde(default)]
    pub investments: Vec<SheetConfigEntry>,
    #[serde(default)]
    pub contributions: Vec<SheetConfigEntry>,
    #[serde(default)]
    pub transactions: Vec<SheetConfigEntry>,
    #[serde(default)]
    pub historic: Vec<SheetConfigEntry>,
}
