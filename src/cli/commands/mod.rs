//! CLI command implementations

pub mod generate;
pub mod inspect;

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::error::CliError;
use crate::config::ConfigurationOptions;
use crate::inference::Record;
use crate::ingest::parse_records;

/// Load records from a file, or from stdin when `input` is `-`
pub(crate) fn load_input(input: &str) -> Result<Vec<Record>, CliError> {
    let content = if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        content
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))?
    };

    Ok(parse_records(&content)?)
}

/// Load generation options from a TOML file
pub(crate) fn load_options(path: &Path) -> Result<ConfigurationOptions, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
    toml::from_str(&content).map_err(|e| CliError::OptionsError(path.to_path_buf(), e.to_string()))
}
