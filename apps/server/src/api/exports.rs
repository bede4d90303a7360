use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::post, Json, Router};
use finmirror_core::exports::ExportReport;

/// Run a sheets export batch and report every sheet's outcome.
async fn export_sheets(State(state): State<Arc<AppState>>) -> ApiResult<Json<ExportReport>> {
    let report = state.export_service.export().await?;
    Ok(Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/exports/sheets", post(export_sheets))
}
