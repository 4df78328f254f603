//! Generate command implementation

use std::path::PathBuf;

use crate::cli::commands::{load_input, load_options};
use crate::cli::error::CliError;
use crate::config::ConfigurationOptions;
use crate::configuration::generate_configuration;

/// Arguments for the `generate` command
pub struct GenerateArgs {
    /// Records file, or `-` for stdin
    pub input: String,
    /// Configuration name (random if not provided)
    pub name: Option<String>,
    /// Sample size override
    pub sample_size: Option<usize>,
    /// TOML options file
    pub options: Option<PathBuf>,
    /// Output format (json, yaml)
    pub format: String,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Options file first, then command-line overrides
    fn resolve_options(&self) -> Result<ConfigurationOptions, CliError> {
        let mut options = match &self.options {
            Some(path) => load_options(path)?,
            None => ConfigurationOptions::default(),
        };
        if let Some(name) = &self.name {
            options.name = Some(name.clone());
        }
        if let Some(size) = self.sample_size {
            options.sample_size = size;
        }
        Ok(options)
    }
}

/// Handle the `generate` command
pub fn handle_generate(args: &GenerateArgs) -> Result<(), CliError> {
    let options = args.resolve_options()?;
    let records = load_input(&args.input)?;

    eprintln!("Generating search configuration...");
    eprintln!("  Records loaded: {}", records.len());

    let config = generate_configuration(&records, &options);

    eprintln!("  Fields: {}", config.schema.len());
    eprintln!("  Sortings: {}", config.sortings.len());
    eprintln!("  Aggregations: {}", config.aggregations.len());

    let output_str = match args.format.as_str() {
        "json" => config.to_json_pretty()?,
        "yaml" => config.to_yaml()?,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown output format: {}",
                other
            )));
        }
    };

    if let Some(ref output_path) = args.output {
        std::fs::write(output_path, &output_str)
            .map_err(|e| CliError::FileWriteError(output_path.clone(), e.to_string()))?;
        eprintln!();
        eprintln!("Configuration written to: {}", output_path.display());
    } else {
        println!("{}", output_str);
    }

    Ok(())
}
