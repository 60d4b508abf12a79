//! Repository trait standing in for a record data source

use crate::core::record::{Record, RecordKey};
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// A requested change to a record, as recorded by a read-only repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RecordAction {
    Edit { record_type: String, key: RecordKey },
    Delete { record_type: String, key: RecordKey },
}

/// Repository trait for the records of one list view
///
/// Implementations supply the collection a view queries. The query engine
/// is agnostic to where the records come from, so a real backend can be
/// substituted without touching it.
#[async_trait]
pub trait RecordRepository<R: Record>: Send + Sync {
    /// List all records in their seeded order
    async fn list_records(&self) -> Result<Vec<R>>;

    /// Get a record by key
    async fn get(&self, key: &RecordKey) -> Result<Option<R>>;

    /// Request an edit of a record
    async fn edit(&self, record: R) -> Result<()>;

    /// Request deletion of a record
    async fn delete(&self, key: &RecordKey) -> Result<()>;
}
