#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    NotFound(String),

    #[error("Invalid dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
