//! Options for type classification and configuration generation

use serde::{Deserialize, Serialize};

/// Smallest usable repeat threshold; below it every token counts as repeated
pub const MIN_REPEAT_COUNT: usize = 2;

/// Thresholds used by the string/array disambiguation heuristic.
///
/// The defaults are part of the output compatibility surface; changing them
/// changes which fields are faceted as tag lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassifierConfig {
    /// Longest token (in characters) still treated as a list item
    pub max_token_length: usize,

    /// Any sampled string longer than this vetoes the array classification
    pub long_text_length: usize,

    /// A flattened token must occur at least this often for the field to
    /// count as a repeated vocabulary (never below [`MIN_REPEAT_COUNT`])
    pub min_repeat_count: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_token_length: 15,
            long_text_length: 100,
            min_repeat_count: MIN_REPEAT_COUNT,
        }
    }
}

impl ClassifierConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom thresholds
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::default()
    }
}

/// Builder for ClassifierConfig
#[derive(Debug, Default)]
pub struct ClassifierConfigBuilder {
    config: ClassifierConfig,
}

impl ClassifierConfigBuilder {
    pub fn max_token_length(mut self, length: usize) -> Self {
        self.config.max_token_length = length;
        self
    }

    pub fn long_text_length(mut self, length: usize) -> Self {
        self.config.long_text_length = length;
        self
    }

    /// Set the repeat threshold (values below 2 are raised to 2)
    pub fn min_repeat_count(mut self, count: usize) -> Self {
        self.config.min_repeat_count = count.max(MIN_REPEAT_COUNT);
        self
    }

    pub fn build(self) -> ClassifierConfig {
        self.config
    }
}

/// Options for a single configuration generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurationOptions {
    /// Configuration name; a random one is generated when absent
    pub name: Option<String>,

    /// Maximum number of records to sample (0 = all)
    pub sample_size: usize,

    /// Classifier thresholds
    pub classifier: ClassifierConfig,
}

impl ConfigurationOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom options
    pub fn builder() -> ConfigurationOptionsBuilder {
        ConfigurationOptionsBuilder::default()
    }
}

/// Builder for ConfigurationOptions
#[derive(Debug, Default)]
pub struct ConfigurationOptionsBuilder {
    options: ConfigurationOptions,
}

impl ConfigurationOptionsBuilder {
    /// Use a fixed configuration name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.name = Some(name.into());
        self
    }

    /// Set the sample size (0 = all records)
    pub fn sample_size(mut self, size: usize) -> Self {
        self.options.sample_size = size;
        self
    }

    /// Replace the classifier thresholds
    pub fn classifier(mut self, config: ClassifierConfig) -> Self {
        self.options.classifier = config;
        self
    }

    /// Build the options
    pub fn build(self) -> ConfigurationOptions {
        self.options
    }
}
