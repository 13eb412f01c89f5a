use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use pacs_sizing::config::report_file_name;
use pacs_sizing::models::ReportRequest;

use crate::error::AppError;
use crate::state::AppState;

/// POST /generate-pdf
///
/// Accepts the computed results payload as JSON and responds with the
/// rendered PDF as an attachment. Schema and validation problems come back
/// as `400 {"success": false, "message": ...}`; render failures as `500`
/// with an additional `"error"` detail.
pub async fn generate_pdf(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let request: ReportRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::bad_request(format!("Incomplete data for PDF generation: {e}")))?;
    request.validate().map_err(AppError::from)?;

    tracing::info!(unit = %request.unit_name, "rendering PDF report");
    let file_name = report_file_name(&request.unit_name);

    // Rendering is CPU-bound; keep it off the async workers.
    let renderer_state = state.clone();
    let bytes = tokio::task::spawn_blocking(move || renderer_state.renderer.render(&request))
        .await
        .map_err(|e| AppError::internal("Failed to generate the PDF report", e.to_string()))??;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={file_name}"),
        ),
        (header::CONTENT_LENGTH, bytes.len().to_string()),
    ];
    Ok((headers, bytes))
}
