use crate::dtos::DiagnosticsResponse;
use crate::services::DatabaseProbe;
use axum::{response::IntoResponse, Json};

/// Best-effort status report. Every failure mode is folded into a
/// descriptive string, so this handler always answers 200.
pub async fn run_diagnostics() -> impl IntoResponse {
    let probe = DatabaseProbe::from_env();
    let status = probe.check().await;
    Json(DiagnosticsResponse::render(&probe, status))
}
