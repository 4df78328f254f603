//! Sort definition generation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::inference::FieldType;

/// Text longer than this (in characters) is not offered as a sort
pub const MAX_SORTABLE_TEXT_LENGTH: usize = 100;

/// Ordering semantics of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    Normal,
    Geo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// A sortable field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SortKind,
    pub order: SortOrder,
    pub field: String,
}

impl Sorting {
    fn new(key: &str, kind: SortKind, order: SortOrder) -> Self {
        Self {
            title: key.to_string(),
            kind,
            order,
            field: key.to_string(),
        }
    }
}

/// Build the sort definition for a field, if its type is sortable.
///
/// Numbers, dates and short strings sort descending; geo fields sort
/// ascending by distance. `value` is the representative value, used for the
/// string length check.
pub fn sort_for(key: &str, field_type: FieldType, value: &Value) -> Option<Sorting> {
    match field_type {
        FieldType::Float | FieldType::Integer | FieldType::Date => {
            Some(Sorting::new(key, SortKind::Normal, SortOrder::Desc))
        }
        FieldType::String => value
            .as_str()
            .filter(|text| text.chars().count() <= MAX_SORTABLE_TEXT_LENGTH)
            .map(|_| Sorting::new(key, SortKind::Normal, SortOrder::Desc)),
        FieldType::Geo => Some(Sorting::new(key, SortKind::Geo, SortOrder::Asc)),
        FieldType::Boolean | FieldType::Array | FieldType::Image | FieldType::Undetermined => None,
    }
}
