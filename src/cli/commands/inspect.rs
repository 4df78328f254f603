//! Inspect command implementation

use crate::cli::commands::load_input;
use crate::cli::error::CliError;
use crate::cli::output::{format_field_json, format_field_table};
use crate::config::ConfigurationOptions;
use crate::configuration::infer_fields;

/// Arguments for the `inspect` command
pub struct InspectArgs {
    /// Records file, or `-` for stdin
    pub input: String,
    /// Sample size (0 = all records)
    pub sample_size: usize,
    /// Output format (table, json)
    pub format: String,
}

/// Handle the `inspect` command
pub fn handle_inspect(args: &InspectArgs) -> Result<(), CliError> {
    let records = load_input(&args.input)?;
    let options = ConfigurationOptions::builder()
        .sample_size(args.sample_size)
        .build();
    let fields = infer_fields(&records, &options);

    match args.format.as_str() {
        "json" => println!("{}", format_field_json(&fields)?),
        "table" => print!("{}", format_field_table(&fields, records.len())),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown output format: {}",
                other
            )));
        }
    }

    Ok(())
}
