//! Background scheduler for periodic sheet exports.
//!
//! Enabled by `FM_EXPORT_INTERVAL_SECS`; each run goes through the same batch
//! guard as the HTTP endpoint.

use std::sync::Arc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::main_lib::AppState;

/// Initial delay before the first export (lets the server fully start)
const INITIAL_DELAY_SECS: u64 = 30;

/// Starts the background export scheduler.
pub fn start_export_scheduler(state: Arc<AppState>, period: Duration) {
    tokio::spawn(async move {
        info!(
            "Sheets export scheduler started ({}s interval)",
            period.as_secs()
        );

        tokio::time::sleep(Duration::from_secs(INITIAL_DELAY_SECS)).await;

        let mut export_interval = interval(period);
        export_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            export_interval.tick().await;
            run_scheduled_export(&state).await;
        }
    });
}

/// Runs a single scheduled export.
async fn run_scheduled_export(state: &Arc<AppState>) {
    debug!("Running scheduled sheets export...");

    match state.export_service.export().await {
        Ok(report) => {
            info!(
                "Scheduled sheets export completed: {} of {} sheets written",
                report.written_count(),
                report.sheets.len()
            );
        }
        // A running batch or a disabled export is expected here
        Err(e) if !e.is_sheet_local() => {
            debug!("Scheduled sheets export skipped: {}", e);
        }
        Err(e) => {
            warn!("Scheduled sheets export failed: {}", e);
        }
    }
}
