use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Policy file error: {0}")]
    PolicyError(#[from] toml::de::Error),

    #[error("Unexpected API status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, HarvestError>;
