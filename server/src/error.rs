use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use pacs_sizing::SizingError;

/// Unified error type that renders as the wire-format JSON failure body:
/// `{"success": false, "message": "..."}`, plus an `"error"` detail field
/// on internal failures.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            detail: None,
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            detail: Some(detail.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self.detail {
            Some(detail) => json!({
                "success": false,
                "message": self.message,
                "error": detail,
            }),
            None => json!({
                "success": false,
                "message": self.message,
            }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<SizingError> for AppError {
    fn from(e: SizingError) -> Self {
        match &e {
            SizingError::InvalidInput(_)
            | SizingError::IncompleteExam(_)
            | SizingError::NoDataProvided
            | SizingError::MissingUnitName => AppError::bad_request(e.to_string()),
            _ => AppError::internal("Failed to generate the PDF report", e.to_string()),
        }
    }
}
