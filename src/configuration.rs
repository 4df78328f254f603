//! Search configuration assembly
//!
//! Ties classification and the fragment generators together. Fields are
//! discovered from the first record only; keys that appear solely in later
//! records are not part of the configuration.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ConfigurationOptions;
use crate::error::ConfigurationError;
use crate::generate::{Aggregation, SchemaField, Sorting, aggregation_for, schema_for, sort_for};
use crate::inference::{Classifier, FieldType, Record, project};
use crate::ingest::into_record;
use crate::naming::{NAME_ALPHABET, NAME_LENGTH, NameGenerator, RandomNameGenerator};

/// A generated search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub name: String,
    /// Every field of the first record; `None` for undetermined fields
    pub schema: BTreeMap<String, Option<SchemaField>>,
    /// Facetable fields only
    pub aggregations: BTreeMap<String, Aggregation>,
    /// Sortable fields only
    pub sortings: BTreeMap<String, Sorting>,
}

impl Configuration {
    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, ConfigurationError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigurationError::Serialization(e.to_string()))
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigurationError> {
        serde_yaml::to_string(self).map_err(|e| ConfigurationError::Serialization(e.to_string()))
    }
}

/// A classified field of the first record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSummary {
    pub field_type: FieldType,
    pub sortable: bool,
    pub facetable: bool,
}

/// Limit records to the configured sample size
fn sampled<'a>(records: &'a [Record], options: &ConfigurationOptions) -> &'a [Record] {
    match options.sample_size {
        0 => records,
        n => &records[..n.min(records.len())],
    }
}

/// Classify every field of the first record against the full field sample
fn classify_fields<'a>(
    records: &'a [Record],
    classifier: &Classifier,
) -> Vec<(&'a String, &'a Value, FieldType)> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let ignored: BTreeSet<&String> = records[1..]
        .iter()
        .flat_map(|record| record.keys())
        .filter(|key| !first.contains_key(key.as_str()))
        .collect();
    if !ignored.is_empty() {
        warn!(
            fields = ?ignored,
            "Ignoring fields missing from the first record"
        );
    }

    first
        .iter()
        .map(|(key, value)| {
            let sample = project(records, key);
            let field_type = classifier.classify(value, Some(&sample));
            debug!(field = %key, field_type = %field_type, "Classified field");
            (key, value, field_type)
        })
        .collect()
}

/// Infer the type of every field without building the full configuration
pub fn infer_fields(
    records: &[Record],
    options: &ConfigurationOptions,
) -> BTreeMap<String, FieldSummary> {
    let records = sampled(records, options);
    let classifier = Classifier::with_config(options.classifier.clone());

    classify_fields(records, &classifier)
        .into_iter()
        .map(|(key, value, field_type)| {
            let summary = FieldSummary {
                field_type,
                sortable: sort_for(key, field_type, value).is_some(),
                facetable: aggregation_for(key, field_type).is_some(),
            };
            (key.clone(), summary)
        })
        .collect()
}

/// Generate a configuration, using a random name unless one is given
pub fn generate_configuration(
    records: &[Record],
    options: &ConfigurationOptions,
) -> Configuration {
    generate_configuration_with(records, options, &RandomNameGenerator)
}

/// Generate a configuration with an explicit name source
pub fn generate_configuration_with(
    records: &[Record],
    options: &ConfigurationOptions,
    names: &dyn NameGenerator,
) -> Configuration {
    let records = sampled(records, options);
    let classifier = Classifier::with_config(options.classifier.clone());

    let mut schema = BTreeMap::new();
    let mut aggregations = BTreeMap::new();
    let mut sortings = BTreeMap::new();

    for (key, value, field_type) in classify_fields(records, &classifier) {
        schema.insert(key.clone(), schema_for(field_type));
        if let Some(aggregation) = aggregation_for(key, field_type) {
            aggregations.insert(key.clone(), aggregation);
        }
        if let Some(sorting) = sort_for(key, field_type, value) {
            sortings.insert(key.clone(), sorting);
        }
    }

    let name = options
        .name
        .clone()
        .unwrap_or_else(|| names.generate(NAME_LENGTH, NAME_ALPHABET));

    info!(
        name = %name,
        records = records.len(),
        fields = schema.len(),
        aggregations = aggregations.len(),
        sortings = sortings.len(),
        "Generated search configuration"
    );

    Configuration {
        name,
        schema,
        aggregations,
        sortings,
    }
}

/// Statistics about the records collected by a generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    /// Records accepted
    pub records_processed: usize,
    /// Records skipped (invalid JSON)
    pub records_skipped: usize,
    /// Fields of the first record
    pub fields_discovered: usize,
    /// Number of fields per inferred type
    pub type_distribution: BTreeMap<String, usize>,
}

/// Incremental configuration builder
///
/// Collects records one at a time and produces the configuration on
/// [`finalize`](Self::finalize).
#[derive(Debug, Clone, Default)]
pub struct ConfigurationGenerator {
    options: ConfigurationOptions,
    records: Vec<Record>,
    skipped_count: usize,
}

impl ConfigurationGenerator {
    /// Create a generator with default options
    pub fn new() -> Self {
        Self::with_options(ConfigurationOptions::default())
    }

    /// Create a generator with custom options
    pub fn with_options(options: ConfigurationOptions) -> Self {
        Self {
            options,
            records: Vec::new(),
            skipped_count: 0,
        }
    }

    fn is_full(&self) -> bool {
        self.options.sample_size > 0 && self.records.len() >= self.options.sample_size
    }

    /// Add a record
    pub fn add_record(&mut self, record: Record) {
        if !self.is_full() {
            self.records.push(record);
        }
    }

    /// Add a parsed JSON value; it must be an object
    pub fn add_value(&mut self, value: Value) -> Result<(), ConfigurationError> {
        if self.is_full() {
            return Ok(());
        }
        self.records.push(into_record(value)?);
        Ok(())
    }

    /// Add a single JSON document. Unparseable input is counted and skipped.
    pub fn add_json(&mut self, json: &str) -> Result<(), ConfigurationError> {
        if self.is_full() {
            return Ok(());
        }

        match serde_json::from_str::<Value>(json) {
            Ok(value) => self.add_value(value),
            Err(e) => {
                warn!(error = %e, "Skipping unparseable record");
                self.skipped_count += 1;
                Ok(())
            }
        }
    }

    /// Add a batch of JSON documents
    pub fn add_json_batch(&mut self, records: &[String]) -> Result<(), ConfigurationError> {
        for json in records {
            self.add_json(json)?;
        }
        Ok(())
    }

    /// Get the number of records collected
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Get current statistics
    pub fn stats(&self) -> GenerationStats {
        let fields = infer_fields(&self.records, &self.options);

        let mut type_distribution = BTreeMap::new();
        for summary in fields.values() {
            *type_distribution
                .entry(summary.field_type.type_name().to_string())
                .or_insert(0) += 1;
        }

        GenerationStats {
            records_processed: self.records.len(),
            records_skipped: self.skipped_count,
            fields_discovered: fields.len(),
            type_distribution,
        }
    }

    /// Build the configuration with a random name (unless one was configured)
    pub fn finalize(self) -> Configuration {
        self.finalize_with(&RandomNameGenerator)
    }

    /// Build the configuration with an explicit name source
    pub fn finalize_with(self, names: &dyn NameGenerator) -> Configuration {
        generate_configuration_with(&self.records, &self.options, names)
    }
}
