use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeedtestError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Measurement failed: {0}")]
    Measurement(String),
}

pub type Result<T> = std::result::Result<T, SpeedtestError>;
