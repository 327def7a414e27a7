use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirfluxError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIo(String, #[source] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    Csv(String, #[source] csv::Error),
}
