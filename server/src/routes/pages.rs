use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET /
///
/// The static estimation form, embedded into the binary at compile time.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Fallback for every unmatched route.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Page not found")
}
