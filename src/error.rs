//! Error types for configuration generation

use thiserror::Error;

/// Errors that can occur while loading records for configuration generation.
///
/// Classification and fragment generation never fail; only ingestion does.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// A record was not a JSON object
    #[error("Invalid record: expected object, found {0}")]
    InvalidStructure(String),

    /// Output serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(e: serde_json::Error) -> Self {
        ConfigurationError::JsonParse(e.to_string())
    }
}

impl From<std::io::Error> for ConfigurationError {
    fn from(e: std::io::Error) -> Self {
        ConfigurationError::Io(e.to_string())
    }
}
