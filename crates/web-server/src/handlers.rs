use crate::{error::AppError, AppState};
use analytics::AnalysisSummary;
use axum::{extract::State, Json};
use axum_extra::extract::Form;
use records::{FormRows, RecordSource};
use std::sync::Arc;

/// # GET /api/dashboard
/// Analyzes the configured sample CSV.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalysisSummary>, AppError> {
    let records = state.sample_source().load().map_err(AppError::Records)?;
    Ok(Json(state.analyzer.analyze_all(&records)))
}

/// # POST /api/analyze
/// Analyzes manually entered rows. A submission without a single usable row
/// falls back to the sample CSV.
pub async fn post_analyze(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormRows>,
) -> Result<Json<AnalysisSummary>, AppError> {
    let mut records = form.load()?;

    if records.is_empty() {
        tracing::info!("No usable rows submitted, analyzing the sample data instead.");
        records = state.sample_source().load().map_err(AppError::Records)?;
    }

    let summary = state.analyzer.analyze_all(&records);
    tracing::info!(rows = summary.rows.len(), total_loss = %summary.total_loss, "Analyzed submitted rows.");
    Ok(Json(summary))
}
