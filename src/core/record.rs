//! Record trait defining the core abstraction for all listed data

use crate::core::field::FieldValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a record inside a collection.
///
/// Keys are compared as strings, whatever the record's native id type is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(String);

impl RecordKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for RecordKey {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<Uuid> for RecordKey {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for RecordKey {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for RecordKey {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// Base trait for every item shown in a list view.
///
/// A record is an immutable bag of named fields with a stable key. The
/// query engine never mutates records; it only reads their fields through
/// [`Record::field_value`].
pub trait Record: Clone + Send + Sync + 'static {
    /// The record type name (e.g., "employee", "task")
    fn record_type() -> &'static str;

    /// The plural collection name (e.g., "employees", "site_visits")
    fn collection_name() -> &'static str;

    /// Fields matched by free-text search
    fn searchable_fields() -> &'static [&'static str];

    /// Fields a view may sort by
    ///
    /// An empty list means any field the records expose.
    fn sortable_fields() -> &'static [&'static str] {
        &[]
    }

    /// Get the stable key of this record
    fn key(&self) -> RecordKey;

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Value matched by free-text search
    ///
    /// Defaults to [`Record::field_value`]. Records that parse text into
    /// typed values override this to search the text as written.
    fn search_value(&self, field: &str) -> Option<FieldValue> {
        self.field_value(field)
    }
}
