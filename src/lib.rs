//! Search Config SDK - infer search-index configuration from sample records
//!
//! Provides:
//! - Field type inference (float, integer, boolean, geo, image, array, date, string)
//! - Schema, sort and aggregation fragment generators
//! - Configuration assembly from a record sample
//! - Record ingestion from JSON arrays and newline-delimited JSON
//!
//! ```rust
//! use search_config_sdk::{ConfigurationOptions, generate_configuration, parse_records};
//!
//! let records = parse_records(r#"[{"price": 2.5, "tags": "red, blue", "seen": "2020-01-01"}]"#)?;
//! let options = ConfigurationOptions::builder().name("shop").build();
//! let config = generate_configuration(&records, &options);
//!
//! assert_eq!(config.schema.len(), 3);
//! assert!(config.sortings.contains_key("seen"));
//! assert!(config.aggregations.contains_key("tags"));
//! # Ok::<(), search_config_sdk::ConfigurationError>(())
//! ```

pub mod cli;
pub mod config;
pub mod configuration;
pub mod error;
pub mod generate;
pub mod inference;
pub mod ingest;
pub mod naming;

// Re-export commonly used types
pub use config::{ClassifierConfig, ConfigurationOptions};
pub use configuration::{
    Configuration, ConfigurationGenerator, FieldSummary, GenerationStats, generate_configuration,
    generate_configuration_with, infer_fields,
};
pub use error::ConfigurationError;
pub use generate::{Aggregation, SchemaField, Sorting, aggregation_for, schema_for, sort_for};
pub use inference::{Classifier, FieldType, Record, classify, flatten_csv, project};
pub use ingest::{load_records, parse_records, read_records};
pub use naming::{FixedName, NameGenerator, RandomNameGenerator};
