//! Schema-less records backed by a JSON object

use crate::core::{FieldValue, Record, RecordKey};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field used as the key when none is configured
pub const DEFAULT_KEY_FIELD: &str = "id";

/// A record whose shape is only known at runtime.
///
/// Search and sort fields for dynamic records come from view configuration
/// (see [`QuerySchema`](crate::engine::QuerySchema)), since the type itself
/// declares none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct DynamicRecord {
    key_field: String,
    fields: Map<String, Value>,
}

impl DynamicRecord {
    /// Wrap a JSON object, keyed by its `id` field
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            key_field: DEFAULT_KEY_FIELD.to_string(),
            fields,
        }
    }

    /// Wrap a JSON value; returns `None` unless it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::new(fields)),
            _ => None,
        }
    }

    /// Use another field as the record key
    pub fn with_key_field(mut self, key_field: impl Into<String>) -> Self {
        self.key_field = key_field.into();
        self
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for DynamicRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

impl From<DynamicRecord> for Map<String, Value> {
    fn from(record: DynamicRecord) -> Self {
        record.fields
    }
}

impl Record for DynamicRecord {
    fn record_type() -> &'static str {
        "record"
    }

    fn collection_name() -> &'static str {
        "records"
    }

    fn searchable_fields() -> &'static [&'static str] {
        &[]
    }

    fn key(&self) -> RecordKey {
        match self.fields.get(&self.key_field) {
            Some(Value::String(s)) => RecordKey::from(s),
            Some(Value::Null) | None => RecordKey::new(""),
            Some(other) => RecordKey::new(other.to_string()),
        }
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.fields.get(field).map(FieldValue::from_json)
    }

    // Date-shaped strings stay text for search so their offsets and
    // formatting match what was written.
    fn search_value(&self, field: &str) -> Option<FieldValue> {
        match self.fields.get(field) {
            Some(Value::String(s)) => Some(FieldValue::String(s.clone())),
            Some(other) => Some(FieldValue::from_json(other)),
            None => None,
        }
    }
}
