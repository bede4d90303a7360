//! Runs export batches over every configured sheet.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::contributions::ContributionRepositoryTrait;
use crate::entities::ByEntity;
use crate::errors::{Error, Result};
use crate::historic::HistoricRepositoryTrait;
use crate::positions::PositionRepositoryTrait;
use crate::settings::{Settings, SettingsProviderTrait, SheetsCredentials, SheetsExportConfig};
use crate::transactions::TransactionRepositoryTrait;

use super::config_resolver::resolve_sheet_configs;
use super::export_model::{ExportReport, SheetConfig, SheetOutcome, SheetPurpose, SheetReport};
use super::export_traits::SheetsExportServiceTrait;
use super::field_resolver::ExportRoot;
use super::grid_traits::GridClientTrait;
use super::sheet_sync::SheetSynchronizer;

/// Service mirroring stored financial records into configured spreadsheets.
pub struct SheetsExportService {
    settings_provider: Arc<dyn SettingsProviderTrait>,
    position_repository: Arc<dyn PositionRepositoryTrait>,
    contribution_repository: Arc<dyn ContributionRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    historic_repository: Arc<dyn HistoricRepositoryTrait>,
    grid_client: Arc<dyn GridClientTrait>,
    batch_guard: Mutex<()>,
}

impl SheetsExportService {
    pub fn new(
        settings_provider: Arc<dyn SettingsProviderTrait>,
        position_repository: Arc<dyn PositionRepositoryTrait>,
        contribution_repository: Arc<dyn ContributionRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        historic_repository: Arc<dyn HistoricRepositoryTrait>,
        grid_client: Arc<dyn GridClientTrait>,
    ) -> Self {
        Self {
            settings_provider,
            position_repository,
            contribution_repository,
            transaction_repository,
            historic_repository,
            grid_client,
            batch_guard: Mutex::new(()),
        }
    }

    /// Runs a batch using `now` as the timestamp of every freshness marker.
    pub async fn export_at(&self, now: DateTime<Utc>) -> Result<ExportReport> {
        let settings = self.settings_provider.load()?;
        let (config, credentials) = validated_config(settings)?;

        let _guard = self
            .batch_guard
            .try_lock()
            .map_err(|_| Error::ExecutionConflict)?;
        let globals = &config.globals;

        let summary = resolve_sheet_configs(globals, &config.summary, SheetPurpose::Summary);
        let investments =
            resolve_sheet_configs(globals, &config.investments, SheetPurpose::Investments);
        let contributions =
            resolve_sheet_configs(globals, &config.contributions, SheetPurpose::Contributions);
        let transactions =
            resolve_sheet_configs(globals, &config.transactions, SheetPurpose::Transactions);
        let historic = resolve_sheet_configs(globals, &config.historic, SheetPurpose::Historic);

        let synchronizer = SheetSynchronizer::new(self.grid_client.as_ref(), &credentials);
        let mut report = ExportReport::default();

        if !summary.is_empty() || !investments.is_empty() {
            match self.position_repository.get_last_grouped_by_entity() {
                Ok(positions) => {
                    let root = ExportRoot::by_entity(&positions);
                    sync_sheets(&synchronizer, &summary, &root, None, &now, &mut report).await;
                    sync_sheets(&synchronizer, &investments, &root, None, &now, &mut report)
                        .await;
                }
                Err(e) => {
                    record_load_failure(&summary, &e, &mut report);
                    record_load_failure(&investments, &e, &mut report);
                }
            }
        }

        if !contributions.is_empty() {
            let loaded = self
                .contribution_repository
                .get_all_grouped_by_entity()
                .and_then(|all| {
                    let last_update = self
                        .contribution_repository
                        .get_last_update_grouped_by_entity()?;
                    Ok((all, last_update))
                });
            match loaded {
                Ok((all, last_update)) => {
                    let root = ExportRoot::by_entity(&all);
                    sync_sheets(
                        &synchronizer,
                        &contributions,
                        &root,
                        Some(&last_update),
                        &now,
                        &mut report,
                    )
                    .await;
                }
                Err(e) => record_load_failure(&contributions, &e, &mut report),
            }
        }

        if !transactions.is_empty() {
            let loaded = self.transaction_repository.get_all().and_then(|all| {
                let last_created = self
                    .transaction_repository
                    .get_last_created_grouped_by_entity()?;
                Ok((all, last_created))
            });
            match loaded {
                Ok((all, last_created)) => {
                    let root = ExportRoot::single(&all);
                    sync_sheets(
                        &synchronizer,
                        &transactions,
                        &root,
                        Some(&last_created),
                        &now,
                        &mut report,
                    )
                    .await;
                }
                Err(e) => record_load_failure(&transactions, &e, &mut report),
            }
        }

        if !historic.is_empty() {
            match self.historic_repository.get_all() {
                Ok(all) => {
                    let root = ExportRoot::single(&all);
                    sync_sheets(&synchronizer, &historic, &root, None, &now, &mut report).await;
                }
                Err(e) => record_load_failure(&historic, &e, &mut report),
            }
        }

        info!(
            "Sheets export finished: {} of {} sheets written",
            report.written_count(),
            report.sheets.len()
        );
        Ok(report)
    }
}

#[async_trait]
impl SheetsExportServiceTrait for SheetsExportService {
    async fn export(&self) -> Result<ExportReport> {
        self.export_at(Utc::now()).await
    }
}

fn validated_config(settings: Settings) -> Result<(SheetsExportConfig, SheetsCredentials)> {
    let config = match settings.export.sheets {
        Some(config) if config.enabled => config,
        _ => return Err(Error::ConfigInvalid("Sheets export is not enabled".to_string())),
    };

    let credentials = settings
        .integrations
        .sheets
        .and_then(|integration| integration.credentials)
        .ok_or_else(|| Error::ConfigInvalid("Missing Sheets credentials".to_string()))?;

    Ok((config, credentials))
}

async fn sync_sheets(
    synchronizer: &SheetSynchronizer<'_>,
    sheets: &[SheetConfig],
    root: &ExportRoot<'_>,
    last_update: Option<&ByEntity<DateTime<Utc>>>,
    now: &DateTime<Utc>,
    report: &mut ExportReport,
) {
    for sheet in sheets {
        let outcome = match synchronizer.sync(sheet, root, last_update, now).await {
            Ok(rows) => SheetOutcome::Written { rows },
            Err(e) => outcome_for_error(sheet, e),
        };
        report.sheets.push(sheet_report(sheet, outcome));
    }
}

fn outcome_for_error(sheet: &SheetConfig, e: Error) -> SheetOutcome {
    match e {
        Error::NoHeadersFound(_) => {
            warn!(
                "No headers found in {} sheet {}, skipping",
                sheet.purpose, sheet.range
            );
            SheetOutcome::SkippedNoHeaders
        }
        Error::ExportTargetMissing(message) => {
            error!(
                "Export target {}/{} not found: {}",
                sheet.spreadsheet_id, sheet.range, message
            );
            SheetOutcome::TargetMissing { message }
        }
        other => {
            error!(
                "Failed to export {} sheet {}: {}",
                sheet.purpose, sheet.range, other
            );
            SheetOutcome::Failed {
                message: other.to_string(),
            }
        }
    }
}

fn record_load_failure(sheets: &[SheetConfig], e: &Error, report: &mut ExportReport) {
    for sheet in sheets {
        debug!(
            "Skipping {} sheet {} after load failure",
            sheet.purpose, sheet.range
        );
        report.sheets.push(sheet_report(
            sheet,
            SheetOutcome::Failed {
                message: e.to_string(),
            },
        ));
    }
    if !sheets.is_empty() {
        error!("Failed to load data for {} sheets: {}", sheets[0].purpose, e);
    }
}

fn sheet_report(sheet: &SheetConfig, outcome: SheetOutcome) -> SheetReport {
    SheetReport {
        purpose: sheet.purpose,
        spreadsheet_id: sheet.spreadsheet_id.clone(),
        range: sheet.range.clone(),
        outcome,
    }
}
