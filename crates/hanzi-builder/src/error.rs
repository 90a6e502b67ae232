#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to download: HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Corpus file not found: {0}")]
    NotFound(String),

    #[error("Failed to read corpus: {0}")]
    Corpus(#[source] std::io::Error),

    #[error("Failed to write dictionary: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Build task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
