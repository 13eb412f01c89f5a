use pacs_sizing::render::ReportRenderer;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Document renderer behind the narrow byte-oriented interface; the
    /// handlers never see a concrete rendering technology.
    pub renderer: Box<dyn ReportRenderer>,
}
