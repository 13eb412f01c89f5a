#[derive(Debug, thiserror::Error)]
pub enum SizingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("incomplete exam entry: {0}")]
    IncompleteExam(String),

    #[error("no exam data provided")]
    NoDataProvided,

    #[error("unit name is required")]
    MissingUnitName,

    #[error("PDF rendering failed: {0}")]
    RenderFailed(String),

    #[error("report request failed: {0}")]
    RenderRequest(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SizingError>;
