//! Field type classification
//!
//! A value is classified by walking an ordered rule list; the first rule whose
//! guard matches decides the type. Rules overlap on purpose (a `"1.5, 2"`
//! string is also a candidate list), so the order is the tie-break policy.

use std::collections::HashMap;

use serde_json::Value;

use super::patterns::{is_calendar_date, is_coordinate_pair, is_image_path};
use super::sample::flatten_csv;
use super::types::FieldType;
use crate::config::{ClassifierConfig, MIN_REPEAT_COUNT};

/// The closed set of value shapes the rules inspect
#[derive(Debug, Clone, Copy, PartialEq)]
enum ValueShape<'a> {
    Number(f64),
    Bool,
    Text(&'a str),
    /// Object with numeric `latitude` and `longitude` members
    Coordinates,
    List,
    /// Null, or an object of any other shape
    Other,
}

impl<'a> ValueShape<'a> {
    fn of(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or(ValueShape::Other, ValueShape::Number),
            Value::Bool(_) => ValueShape::Bool,
            Value::String(s) => ValueShape::Text(s),
            Value::Array(_) => ValueShape::List,
            Value::Object(obj) => {
                let numeric = |key: &str| obj.get(key).is_some_and(Value::is_number);
                if numeric("latitude") && numeric("longitude") {
                    ValueShape::Coordinates
                } else {
                    ValueShape::Other
                }
            }
            Value::Null => ValueShape::Other,
        }
    }
}

type Guard = fn(&ValueShape<'_>) -> bool;

fn is_fractional(shape: &ValueShape<'_>) -> bool {
    matches!(shape, ValueShape::Number(n) if n.fract() != 0.0)
}

fn is_bool(shape: &ValueShape<'_>) -> bool {
    matches!(shape, ValueShape::Bool)
}

fn is_coordinate_text(shape: &ValueShape<'_>) -> bool {
    matches!(shape, ValueShape::Text(s) if is_coordinate_pair(s))
}

fn is_coordinate_object(shape: &ValueShape<'_>) -> bool {
    matches!(shape, ValueShape::Coordinates)
}

fn is_image_text(shape: &ValueShape<'_>) -> bool {
    matches!(shape, ValueShape::Text(s) if is_image_path(s))
}

fn is_number(shape: &ValueShape<'_>) -> bool {
    matches!(shape, ValueShape::Number(_))
}

fn is_list(shape: &ValueShape<'_>) -> bool {
    matches!(shape, ValueShape::List)
}

fn is_date_text(shape: &ValueShape<'_>) -> bool {
    matches!(shape, ValueShape::Text(s) if is_calendar_date(s))
}

/// Ordered rules; evaluated top to bottom, first match wins.
const RULES: &[(Guard, FieldType)] = &[
    (is_fractional, FieldType::Float),
    (is_bool, FieldType::Boolean),
    (is_coordinate_text, FieldType::Geo),
    (is_coordinate_object, FieldType::Geo),
    (is_image_text, FieldType::Image),
    (is_number, FieldType::Integer),
    (is_list, FieldType::Array),
    (is_date_text, FieldType::Date),
];

/// Field type classifier
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Create a classifier with the default thresholds
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a classifier with custom thresholds.
    ///
    /// A `min_repeat_count` below 2 is raised to 2.
    pub fn with_config(mut config: ClassifierConfig) -> Self {
        config.min_repeat_count = config.min_repeat_count.max(MIN_REPEAT_COUNT);
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a representative value.
    ///
    /// `sample` is the field's value across all records; it is only consulted
    /// when deciding between `String` and `Array` for text values.
    pub fn classify(&self, value: &Value, sample: Option<&[&Value]>) -> FieldType {
        let shape = ValueShape::of(value);

        if let Some((_, field_type)) = RULES.iter().find(|(guard, _)| guard(&shape)) {
            return *field_type;
        }

        match shape {
            ValueShape::Text(text) => self.disambiguate_text(text, sample),
            _ => FieldType::Undetermined,
        }
    }

    /// Decide whether free text is really a delimited list or a tag vocabulary
    fn disambiguate_text(&self, text: &str, sample: Option<&[&Value]>) -> FieldType {
        let tokens: Vec<&str> = text.split(',').map(str::trim).collect();
        if tokens.len() > 1
            && tokens
                .iter()
                .all(|token| token.chars().count() <= self.config.max_token_length)
        {
            return FieldType::Array;
        }

        let Some(sample) = sample else {
            return FieldType::String;
        };

        let has_long_text = sample.iter().any(|value| {
            value
                .as_str()
                .is_some_and(|s| s.chars().count() > self.config.long_text_length)
        });
        if has_long_text {
            return FieldType::String;
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in flatten_csv(sample) {
            *counts.entry(token).or_insert(0) += 1;
        }

        match counts.values().max() {
            Some(&top) if top >= self.config.min_repeat_count => FieldType::Array,
            _ => FieldType::String,
        }
    }
}

/// Classify a value with the default thresholds
pub fn classify(value: &Value, sample: Option<&[&Value]>) -> FieldType {
    Classifier::new().classify(value, sample)
}
