//! Semantic field types

use serde::{Deserialize, Serialize};

/// A single input record: field name to untyped JSON value
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Semantic type assigned to a field.
///
/// Exactly one type is assigned per field; values matching no rule are
/// `Undetermined` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Number with a non-zero fractional part
    Float,
    Boolean,
    /// Coordinate pair string or `{latitude, longitude}` object
    Geo,
    /// Path or URL ending in an image extension
    Image,
    /// Integral number
    Integer,
    /// JSON array, delimited list, or repeated vocabulary
    Array,
    Date,
    String,
    Undetermined,
}

impl FieldType {
    /// Get the tag name of this type
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Geo => "geo",
            FieldType::Image => "image",
            FieldType::Integer => "integer",
            FieldType::Array => "array",
            FieldType::Date => "date",
            FieldType::String => "string",
            FieldType::Undetermined => "undetermined",
        }
    }

    /// Whether the type is one of the two numeric types
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Float | FieldType::Integer)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_tags_match_type_names() {
        for field_type in [
            FieldType::Float,
            FieldType::Boolean,
            FieldType::Geo,
            FieldType::Image,
            FieldType::Integer,
            FieldType::Array,
            FieldType::Date,
            FieldType::String,
            FieldType::Undetermined,
        ] {
            let json = serde_json::to_value(field_type).unwrap();
            assert_eq!(json, field_type.type_name());
            assert_eq!(field_type.to_string(), field_type.type_name());
        }
    }

    #[test]
    fn test_is_numeric() {
        assert!(FieldType::Float.is_numeric());
        assert!(FieldType::Integer.is_numeric());
        assert!(!FieldType::Date.is_numeric());
    }
}
