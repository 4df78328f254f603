//! Configuration generation tests

use search_config_sdk::{
    ConfigurationOptions, FieldType, FixedName, classify, generate_configuration,
    generate_configuration_with, parse_records,
};
use serde_json::{Value, json};

fn named(name: &str) -> ConfigurationOptions {
    ConfigurationOptions::builder().name(name).build()
}

mod classification_tests {
    use super::*;

    #[test]
    fn test_fractional_numbers_are_float() {
        for value in [0.5, -1.25, 1e-3, 123456.789] {
            assert_eq!(classify(&json!(value), None), FieldType::Float);
        }
    }

    #[test]
    fn test_booleans_win_before_other_rules() {
        let sample = [json!(true), json!(true), json!(false)];
        let refs: Vec<&Value> = sample.iter().collect();
        assert_eq!(classify(&json!(true), Some(&refs)), FieldType::Boolean);
    }

    #[test]
    fn test_coordinate_string() {
        assert_eq!(classify(&json!("12.5, -3.2"), None), FieldType::Geo);
    }

    #[test]
    fn test_image_extensions() {
        for path in ["a.png", "b.jpg", "c.jpeg", "d.gif", "2021-05-01.png"] {
            assert_eq!(classify(&json!(path), None), FieldType::Image, "{}", path);
        }
    }

    #[test]
    fn test_long_text_veto() {
        let long = "lorem ipsum ".repeat(10);
        let sample = [json!("sale, new"), json!("sale"), json!(long)];
        let refs: Vec<&Value> = sample.iter().collect();

        assert_eq!(classify(&json!("sale"), Some(&refs)), FieldType::String);
    }
}

mod document_tests {
    use super::*;

    fn catalog() -> Vec<search_config_sdk::Record> {
        parse_records(
            r#"[
                {"name": "Desk", "price": 199.99, "stock": 4, "active": true,
                 "location": {"latitude": 52.52, "longitude": 13.405},
                 "image": "https://cdn.example.com/desk.jpg",
                 "tags": "office, wood", "added": "2023-04-01",
                 "category": "furniture", "notes": null},
                {"name": "Chair", "price": 49.5, "stock": 10, "active": false,
                 "location": {"latitude": 48.13, "longitude": 11.58},
                 "image": "https://cdn.example.com/chair.png",
                 "tags": "office", "added": "2023-05-12",
                 "category": "furniture", "notes": "stackable"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_full_document() {
        let config = generate_configuration(&catalog(), &named("catalog"));
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["name"], "catalog");
        assert_eq!(json["schema"]["price"], json!({"type": "float", "store": true}));
        assert_eq!(json["schema"]["stock"], json!({"type": "integer", "store": true}));
        assert_eq!(json["schema"]["active"], json!({"type": "boolean"}));
        assert_eq!(json["schema"]["location"], json!({"type": "geo_point"}));
        assert_eq!(
            json["schema"]["image"],
            json!({"type": "string", "display": "image"})
        );
        assert_eq!(json["schema"]["tags"]["display"], "array");
        assert_eq!(json["schema"]["added"], json!({"type": "date", "store": true}));
        // "furniture" repeats across records
        assert_eq!(json["schema"]["category"]["display"], "array");
        assert_eq!(json["schema"]["name"], json!({"type": "string", "store": true}));
        assert_eq!(json["schema"]["notes"], Value::Null);

        let sortings: Vec<&String> = config.sortings.keys().collect();
        assert_eq!(
            sortings,
            vec!["added", "location", "name", "price", "stock"]
        );
        assert_eq!(json["sortings"]["location"]["order"], "asc");

        let aggregations: Vec<&String> = config.aggregations.keys().collect();
        assert_eq!(
            aggregations,
            vec!["active", "category", "location", "price", "stock", "tags"]
        );
        assert_eq!(json["aggregations"]["location"]["unit"], "km");
    }

    #[test]
    fn test_schema_keys_match_first_record() {
        let records = catalog();
        let config = generate_configuration(&records, &named("catalog"));

        let mut expected: Vec<&String> = records[0].keys().collect();
        expected.sort();
        assert_eq!(config.schema.keys().collect::<Vec<_>>(), expected);
        assert!(config.sortings.keys().all(|k| config.schema.contains_key(k)));
        assert!(config.aggregations.keys().all(|k| config.schema.contains_key(k)));
    }

    #[test]
    fn test_deterministic_with_explicit_name() {
        let records = catalog();
        let first = generate_configuration(&records, &named("catalog"))
            .to_json_pretty()
            .unwrap();
        let second = generate_configuration(&records, &named("catalog"))
            .to_json_pretty()
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_only_name_differs_without_explicit_name() {
        let records = catalog();
        let options = ConfigurationOptions::default();

        let mut first = generate_configuration_with(&records, &options, &FixedName("a".into()));
        let second = generate_configuration_with(&records, &options, &FixedName("b".into()));
        assert_ne!(first, second);

        first.name = "b".to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_spec_example_record() {
        let records = parse_records(r#"[{"price": 2.5, "tags": "red, blue", "seen": "2020-01-01"}]"#)
            .unwrap();
        let config = generate_configuration(&records, &named("example"));

        assert_eq!(config.schema.len(), 3);
        assert!(config.sortings.contains_key("price"));
        assert!(config.sortings.contains_key("seen"));
        assert!(!config.sortings.contains_key("tags"));
        assert!(config.aggregations.contains_key("price"));
        assert!(config.aggregations.contains_key("tags"));
        assert!(!config.aggregations.contains_key("seen"));
    }

    #[test]
    fn test_empty_input_yields_empty_document() {
        let records = parse_records("[]").unwrap();
        let config = generate_configuration(&records, &named("empty"));

        assert_eq!(config.name, "empty");
        assert!(config.schema.is_empty());
    }
}

mod ingest_tests {
    use super::*;
    use search_config_sdk::{ConfigurationError, load_records};

    #[test]
    fn test_load_ndjson_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.ndjson");
        std::fs::write(&path, "{\"a\": 1.5}\n{\"a\": 2}\n").unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);

        let config = generate_configuration(&records, &named("n"));
        assert!(config.aggregations.contains_key("a"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigurationError::Io(_)));
    }
}
