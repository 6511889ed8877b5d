use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectError>;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid city record: {0}")]
    InvalidCity(String),

    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
