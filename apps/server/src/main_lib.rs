use std::sync::Arc;

use crate::{config::Config, settings_loader::YamlSettingsProvider, snapshot_store::SnapshotStore};
use finmirror_core::exports::{SheetsExportService, SheetsExportServiceTrait};
use finmirror_sheets::SheetsClient;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub export_service: Arc<dyn SheetsExportServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!("Settings file in use: {}", config.settings_file.display());
    tracing::info!("Data file in use: {}", config.data_file.display());

    let settings_provider = Arc::new(YamlSettingsProvider::new(config.settings_file.clone()));
    let snapshot_store = Arc::new(SnapshotStore::new(config.data_file.clone()));
    let grid_client = Arc::new(SheetsClient::new(&config.sheets_api_url)?);

    let export_service = Arc::new(SheetsExportService::new(
        settings_provider,
        snapshot_store.clone(),
        snapshot_store.clone(),
        snapshot_store.clone(),
        snapshot_store,
        grid_client,
    ));

    Ok(Arc::new(AppState { export_service }))
}
