//! Report server for the PACS storage sizing toolkit.
//!
//! Serves the static estimation form and renders computed projections into
//! downloadable PDF reports via `POST /generate-pdf`.

pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Chart data URLs get large; match the original 10 MB body allowance.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the application router over the given shared state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::pages::index))
        .route("/generate-pdf", post(routes::report::generate_pdf))
        .fallback(routes::pages::not_found)
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
