//! Export settings read from a YAML file.

use std::path::{Path, PathBuf};

use finmirror_core::errors::{Error, Result};
use finmirror_core::settings::{Settings, SettingsProviderTrait};
use tracing::debug;

/// Settings provider backed by a YAML file.
///
/// The file is read on every call so edits apply to the next export without
/// a restart. A missing file means nothing is configured.
pub struct YamlSettingsProvider {
    path: PathBuf,
}

impl YamlSettingsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsProviderTrait for YamlSettingsProvider {
    fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            debug!("Settings file {} not found", self.path.display());
            return Ok(Settings::default());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        parse_settings(&raw)
    }
}

pub fn parse_settings(raw: &str) -> Result<Settings> {
    if raw.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(raw)
        .map_err(|e| Error::ConfigInvalid(format!("Invalid settings file: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use finmirror_core::settings::OneOrMany;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SETTINGS: &str = r#"
integrations:
  sheets:
    credentials: { accessToken: "ya29.token" }
export:
  sheets:
    enabled: true
    globals: { spreadsheetId: "sheet-1", dateFormat: "%d/%m/%Y", timezone: "Europe/Madrid" }
    summary: [ { range: "Summary" } ]
    investments: [ { range: "Stocks", data: ["stocks", "funds"] } ]
    contributions: [ { range: "Contribs", data: "periodic" } ]
    transactions:
      - range: "Txs"
        spreadsheetId: "sheet-2"
        data: ["investment"]
        filters: [ { field: "product_type", values: "STOCK_ETF" } ]
"#;

    #[test]
    fn test_parses_full_settings() {
        let settings = parse_settings(SETTINGS).unwrap();

        let credentials = settings
            .integrations
            .sheets
            .and_then(|sheets| sheets.credentials)
            .unwrap();
        assert_eq!(credentials.access_token, "ya29.token");

        let sheets = settings.export.sheets.unwrap();
        assert!(sheets.enabled);
        assert_eq!(sheets.globals.spreadsheet_id, "sheet-1");
        assert_eq!(sheets.globals.timezone.as_deref(), Some("Europe/Madrid"));
        assert_eq!(sheets.globals.datetime_format, None);
        assert_eq!(sheets.summary[0].range, "Summary");
        assert_eq!(
            sheets.investments[0].data.to_vec(),
            vec!["stocks".to_string(), "funds".to_string()]
        );
        assert_eq!(
            sheets.contributions[0].data,
            OneOrMany::One("periodic".to_string())
        );
        let filters = sheets.transactions[0].filters.clone().unwrap();
        assert_eq!(filters[0].field, "product_type");
        assert_eq!(
            filters[0].values.to_vec(),
            vec![serde_json::json!("STOCK_ETF")]
        );
        assert_eq!(
            sheets.transactions[0].spreadsheet_id.as_deref(),
            Some("sheet-2")
        );
        assert!(sheets.historic.is_empty());
    }

    #[test]
    fn test_missing_file_is_unconfigured() {
        let dir = tempfile::tempdir().unwrap();
        let provider = YamlSettingsProvider::new(dir.path().join("absent.yml"));

        let settings = provider.load().unwrap();

        assert!(settings.export.sheets.is_none());
    }

    #[test]
    fn test_file_is_reread_on_every_load() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "export:\n  sheets:\n    enabled: false").unwrap();
        let provider = YamlSettingsProvider::new(file.path());

        assert!(!provider.load().unwrap().export.sheets.unwrap().enabled);

        std::fs::write(provider.path(), SETTINGS).unwrap();
        assert!(provider.load().unwrap().export.sheets.unwrap().enabled);
    }

    #[test]
    fn test_malformed_yaml_is_invalid_config() {
        let result = parse_settings("export: [unclosed");

        assert!(matches!(result, Err(Error::ConfigInvalid(_))));
    }
}
