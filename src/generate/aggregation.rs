//! Aggregation (facet) definition generation
//!
//! Bucket boundaries and labels below are emitted verbatim. The numeric labels
//! do not line up with their boundaries and the last distance ring overlaps the
//! middle one; consumers depend on these exact values.

use serde::{Deserialize, Serialize};

use crate::inference::FieldType;

/// Maximum number of buckets in a terms facet
pub const TERMS_FACET_SIZE: usize = 15;

/// Title of every distance facet
pub const DISTANCE_FACET_TITLE: &str = "Distance ranges [km]";

/// (lte, gte, name)
type BucketSpec = (Option<u32>, Option<u32>, &'static str);

const NUMERIC_BUCKETS: [BucketSpec; 4] = [
    (Some(2), None, "1 - 2"),
    (Some(3), Some(2), "2 - 3"),
    (Some(4), Some(3), "3 - 4"),
    (None, Some(4), "4 - 5"),
];

const DISTANCE_BUCKETS: [BucketSpec; 3] = [
    (Some(500), None, "< 500"),
    (Some(1000), Some(500), "500 - 1000"),
    (None, Some(500), "> 1000"),
];

/// One bucket of a range facet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBucket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<u32>,
    pub name: String,
}

impl RangeBucket {
    fn from_spec((lte, gte, name): &BucketSpec) -> Self {
        Self {
            lte: *lte,
            gte: *gte,
            name: (*name).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
}

/// A facet over one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Aggregation {
    /// Fixed numeric ranges
    Range {
        field: String,
        title: String,
        ranges: Vec<RangeBucket>,
    },
    /// Distance rings around a point
    GeoDistance {
        field: String,
        ranges: Vec<RangeBucket>,
        unit: DistanceUnit,
        title: String,
    },
    /// Discrete value buckets
    Terms {
        size: usize,
        field: String,
        title: String,
    },
}

fn buckets(specs: &[BucketSpec]) -> Vec<RangeBucket> {
    specs.iter().map(RangeBucket::from_spec).collect()
}

/// Build the facet for a field, if its type can be faceted.
pub fn aggregation_for(key: &str, field_type: FieldType) -> Option<Aggregation> {
    match field_type {
        FieldType::Float | FieldType::Integer => Some(Aggregation::Range {
            field: key.to_string(),
            title: key.to_string(),
            ranges: buckets(&NUMERIC_BUCKETS),
        }),
        FieldType::Geo => Some(Aggregation::GeoDistance {
            field: key.to_string(),
            ranges: buckets(&DISTANCE_BUCKETS),
            unit: DistanceUnit::Km,
            title: DISTANCE_FACET_TITLE.to_string(),
        }),
        FieldType::Array | FieldType::Boolean => Some(Aggregation::Terms {
            size: TERMS_FACET_SIZE,
            field: key.to_string(),
            title: key.to_string(),
        }),
        FieldType::String | FieldType::Date | FieldType::Image | FieldType::Undetermined => None,
    }
}
