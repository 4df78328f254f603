//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ConfigurationError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Invalid options file {0}: {1}")]
    OptionsError(PathBuf, String),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
