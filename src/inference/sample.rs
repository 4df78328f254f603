//! Field sampling and comma-separated value flattening

use serde_json::Value;

use super::types::Record;

static MISSING: Value = Value::Null;

/// Collect the value of `key` from every record, in input order.
///
/// Records without the key contribute `null`, so the sample always has one
/// entry per record.
pub fn project<'a>(records: &'a [Record], key: &str) -> Vec<&'a Value> {
    records
        .iter()
        .map(|record| record.get(key).unwrap_or(&MISSING))
        .collect()
}

/// Split every string value on commas and return the trimmed tokens in order.
///
/// Non-string values contribute nothing.
pub fn flatten_csv<'a>(values: &[&'a Value]) -> Vec<&'a str> {
    values
        .iter()
        .filter_map(|value| value.as_str())
        .flat_map(|text| text.split(',').map(str::trim))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: Vec<Value>) -> Vec<Record> {
        values
            .into_iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_project_keeps_order_and_fills_missing() {
        let data = records(vec![
            json!({"tags": "a, b"}),
            json!({"other": 1}),
            json!({"tags": 3}),
        ]);

        let sample = project(&data, "tags");
        assert_eq!(sample, vec![&json!("a, b"), &Value::Null, &json!(3)]);
    }

    #[test]
    fn test_project_empty() {
        assert!(project(&[], "tags").is_empty());
    }

    #[test]
    fn test_flatten_csv_trims_and_skips_non_strings() {
        let values = [json!("red, blue"), json!(12), json!(" green "), Value::Null];
        let refs: Vec<&Value> = values.iter().collect();

        assert_eq!(flatten_csv(&refs), vec!["red", "blue", "green"]);
    }

    #[test]
    fn test_flatten_csv_keeps_empty_tokens() {
        let values = [json!("a,,b")];
        let refs: Vec<&Value> = values.iter().collect();

        assert_eq!(flatten_csv(&refs), vec!["a", "", "b"]);
    }
}
