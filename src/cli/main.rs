//! search-config binary

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use search_config_sdk::cli::commands::generate::{GenerateArgs, handle_generate};
use search_config_sdk::cli::commands::inspect::{InspectArgs, handle_inspect};

#[derive(Parser)]
#[command(name = "search-config", version, about = "Infer search-index configuration from sample records")]
struct Cli {
    /// Show info-level logs (honours RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Suppress all logs
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a search configuration from records
    Generate {
        /// Records file (JSON array or newline-delimited JSON), `-` for stdin
        #[arg(long, short)]
        input: String,
        /// Configuration name (random if omitted)
        #[arg(long)]
        name: Option<String>,
        /// Number of records to sample (0 = all)
        #[arg(long)]
        sample_size: Option<usize>,
        /// TOML file with generation options
        #[arg(long)]
        options: Option<PathBuf>,
        /// Output format
        #[arg(long, short, default_value = "json", value_parser = ["json", "yaml"])]
        format: String,
        /// Output file (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show the inferred type of every field
    Inspect {
        /// Records file (JSON array or newline-delimited JSON), `-` for stdin
        #[arg(long, short)]
        input: String,
        /// Number of records to sample (0 = all)
        #[arg(long, default_value_t = 0)]
        sample_size: usize,
        /// Output format
        #[arg(long, short, default_value = "table", value_parser = ["table", "json"])]
        format: String,
    },
}

fn init_tracing(cli: &Cli) {
    // off unless --verbose; RUST_LOG only applies with --verbose
    let filter = if cli.verbose && !cli.quiet {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    match cli.command {
        Commands::Generate {
            input,
            name,
            sample_size,
            options,
            format,
            output,
        } => handle_generate(&GenerateArgs {
            input,
            name,
            sample_size,
            options,
            format,
            output,
        })?,
        Commands::Inspect {
            input,
            sample_size,
            format,
        } => handle_inspect(&InspectArgs {
            input,
            sample_size,
            format,
        })?,
    }

    Ok(())
}
