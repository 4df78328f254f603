//! Configuration fragment generators
//!
//! Each generator maps a field type to one fragment of the search
//! configuration. They are independent pure functions:
//!
//! - [`schema_for`] - storage and indexing (every determined type)
//! - [`sort_for`] - sortable fields (numbers, dates, short strings, geo)
//! - [`aggregation_for`] - facets (numbers, geo, arrays, booleans)

mod aggregation;
mod schema;
mod sort;

pub use aggregation::{
    Aggregation, DISTANCE_FACET_TITLE, DistanceUnit, RangeBucket, TERMS_FACET_SIZE,
    aggregation_for,
};
pub use schema::{DisplayHint, IndexMode, SchemaField, StorageType, schema_for};
pub use sort::{MAX_SORTABLE_TEXT_LENGTH, SortKind, SortOrder, Sorting, sort_for};
