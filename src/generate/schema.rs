//! Schema field generation

use serde::{Deserialize, Serialize};

use crate::inference::FieldType;

/// Storage type of an indexed field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Float,
    Integer,
    GeoPoint,
    String,
    Boolean,
    Date,
}

/// Presentation hint for string fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayHint {
    Image,
    Array,
}

/// Index analysis mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexMode {
    /// Index the value verbatim, without tokenizing
    NotAnalyzed,
}

/// How a single field is stored and indexed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    #[serde(rename = "type")]
    pub storage_type: StorageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayHint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<IndexMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<bool>,
}

impl SchemaField {
    fn new(storage_type: StorageType) -> Self {
        Self {
            storage_type,
            display: None,
            index: None,
            store: None,
        }
    }

    fn stored(mut self) -> Self {
        self.store = Some(true);
        self
    }

    fn with_display(mut self, display: DisplayHint) -> Self {
        self.display = Some(display);
        self
    }

    fn with_index(mut self, index: IndexMode) -> Self {
        self.index = Some(index);
        self
    }
}

/// Build the schema field for a type.
///
/// Returns `None` only for `Undetermined`.
pub fn schema_for(field_type: FieldType) -> Option<SchemaField> {
    let field = match field_type {
        FieldType::Float => SchemaField::new(StorageType::Float).stored(),
        FieldType::Integer => SchemaField::new(StorageType::Integer).stored(),
        FieldType::Geo => SchemaField::new(StorageType::GeoPoint),
        FieldType::Image => SchemaField::new(StorageType::String).with_display(DisplayHint::Image),
        FieldType::Boolean => SchemaField::new(StorageType::Boolean),
        FieldType::Array => SchemaField::new(StorageType::String)
            .with_display(DisplayHint::Array)
            .with_index(IndexMode::NotAnalyzed)
            .stored(),
        FieldType::Date => SchemaField::new(StorageType::Date).stored(),
        FieldType::String => SchemaField::new(StorageType::String).stored(),
        FieldType::Undetermined => return None,
    };
    Some(field)
}
