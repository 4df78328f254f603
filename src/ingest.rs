//! Record loading from JSON text
//!
//! Accepts a JSON array of objects, a single object, or newline-delimited
//! objects.

use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::ConfigurationError;
use crate::inference::Record;

/// Parse records from JSON text
pub fn parse_records(input: &str) -> Result<Vec<Record>, ConfigurationError> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let records = if trimmed.starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(trimmed)?;
        values
            .into_iter()
            .map(into_record)
            .collect::<Result<Vec<_>, _>>()?
    } else {
        let mut records = Vec::new();
        for value in serde_json::Deserializer::from_str(trimmed).into_iter::<Value>() {
            records.push(into_record(value?)?);
        }
        records
    };

    debug!(records = records.len(), "parsed records");
    Ok(records)
}

/// Read and parse records from a reader
pub fn read_records<R: Read>(mut reader: R) -> Result<Vec<Record>, ConfigurationError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_records(&content)
}

/// Load records from a file
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, ConfigurationError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_records(&content)
}

/// Unwrap a JSON object into a record
pub fn into_record(value: Value) -> Result<Record, ConfigurationError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConfigurationError::InvalidStructure(
            value_type_name(&other).to_string(),
        )),
    }
}

pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let records = parse_records(r#"[{"a": 1}, {"a": 2, "b": "x"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["b"], "x");
    }

    #[test]
    fn test_parse_single_object() {
        let records = parse_records(r#"{"a": 1}"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_ndjson() {
        let input = "{\"a\": 1}\n{\"a\": 2}\n\n{\"a\": 3}\n";
        let records = parse_records(input).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2]["a"], 3);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_records("").unwrap().is_empty());
        assert!(parse_records("  \n").unwrap().is_empty());
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_non_object_record() {
        let err = parse_records("[1, 2]").unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidStructure("number".to_string()));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_records("[{\"a\": 1"),
            Err(ConfigurationError::JsonParse(_))
        ));
        assert!(matches!(
            parse_records("{\"a\": 1} {oops}"),
            Err(ConfigurationError::JsonParse(_))
        ));
    }

    #[test]
    fn test_read_records() {
        let input = br#"[{"name": "Alice"}]"#;
        let records = read_records(&input[..]).unwrap();
        assert_eq!(records[0]["name"], "Alice");
    }
}
