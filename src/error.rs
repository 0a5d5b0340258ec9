use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("unknown timezone '{0}'")]
    InvalidTimezone(String),

    #[error("failed to initialise logging: {0}")]
    Logging(String),

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashError>;
