//! Field type inference for untyped records
//!
//! Each field is classified from a representative value (taken from the first
//! record), with the field's values across all records as auxiliary context.
//!
//! ## Types
//!
//! - **float / integer** - numbers, split on whether a fractional part exists
//! - **boolean**
//! - **geo** - `"lat, lon"` strings and `{latitude, longitude}` objects
//! - **image** - paths ending in `.jpg`, `.jpeg`, `.png`, `.gif`
//! - **array** - JSON arrays, short comma-delimited lists, repeated vocabularies
//! - **date** - calendar dates and timestamps
//! - **string** - any other text
//! - **undetermined** - null and unrecognized objects
//!
//! ## Example
//!
//! ```rust
//! use search_config_sdk::inference::{FieldType, classify};
//! use serde_json::json;
//!
//! let sample = [json!("draft"), json!("final"), json!("draft")];
//! let refs: Vec<_> = sample.iter().collect();
//!
//! assert_eq!(classify(&json!("12.5, -3.2"), None), FieldType::Geo);
//! assert_eq!(classify(&json!("draft"), Some(&refs)), FieldType::Array);
//! ```

mod classifier;
mod patterns;
mod sample;
mod types;

pub use classifier::{Classifier, classify};
pub use patterns::{is_calendar_date, is_coordinate_pair, is_image_path};
pub use sample::{flatten_csv, project};
pub use types::{FieldType, Record};
