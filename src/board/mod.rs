//! Bucketed boards with explicit move commands
//!
//! A board keeps an ordered list of record keys per bucket (e.g. one column
//! per task status). Reordering and reassignment are expressed as
//! [`MoveCommand`]s applied to that structure. Moves live in memory only;
//! the records themselves are never touched.

use crate::core::{BoardError, FieldValue, Record, RecordKey};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Move a record to a bucket at a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommand {
    pub key: RecordKey,
    pub to_bucket: String,
    /// Index in the target bucket; clamped to the bucket length
    pub position: usize,
}

impl MoveCommand {
    pub fn new(key: impl Into<RecordKey>, to_bucket: impl Into<String>, position: usize) -> Self {
        Self {
            key: key.into(),
            to_bucket: to_bucket.into(),
            position,
        }
    }
}

/// Where a move left the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub from_bucket: String,
    pub bucket: String,
    pub position: usize,
}

/// Ordered lists of record keys, one per bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    buckets: IndexMap<String, Vec<RecordKey>>,
}

impl Board {
    /// Create a board with empty buckets, in the given order
    pub fn new<S: Into<String>>(buckets: impl IntoIterator<Item = S>) -> Self {
        Self {
            buckets: buckets.into_iter().map(|b| (b.into(), Vec::new())).collect(),
        }
    }

    /// Group records into buckets by the text of `bucket_field`.
    ///
    /// Records keep their input order inside each bucket. Records whose
    /// field names no listed bucket are left off the board. A key already on
    /// the board keeps its first placement; later records with the same key
    /// are skipped.
    pub fn from_records<R: Record, S: Into<String>>(
        records: &[R],
        bucket_field: &str,
        buckets: impl IntoIterator<Item = S>,
    ) -> Self {
        let mut board = Self::new(buckets);
        for record in records {
            let bucket = match record.field_value(bucket_field) {
                Some(FieldValue::String(s)) => s,
                _ => continue,
            };
            let key = record.key();
            if board.locate(&key).is_some() {
                tracing::warn!(
                    record_type = R::record_type(),
                    key = %key,
                    "duplicate key left off board"
                );
                continue;
            }
            match board.buckets.get_mut(&bucket) {
                Some(keys) => keys.push(key),
                None => tracing::debug!(
                    record_type = R::record_type(),
                    key = %key,
                    bucket = %bucket,
                    "record left off board"
                ),
            }
        }
        board
    }

    /// Keys of one bucket, in order
    pub fn bucket(&self, name: &str) -> Option<&[RecordKey]> {
        self.buckets.get(name).map(Vec::as_slice)
    }

    pub fn bucket_names(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Bucket currently holding a key
    pub fn locate(&self, key: &RecordKey) -> Option<(&str, usize)> {
        self.buckets.iter().find_map(|(name, keys)| {
            keys.iter()
                .position(|k| k == key)
                .map(|index| (name.as_str(), index))
        })
    }

    /// Number of records on the board
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply a move command.
    ///
    /// The board is unchanged when the command fails.
    pub fn apply(&mut self, command: MoveCommand) -> Result<MoveOutcome, BoardError> {
        if !self.buckets.contains_key(&command.to_bucket) {
            return Err(BoardError::UnknownBucket {
                bucket: command.to_bucket,
            });
        }

        let (from_bucket, index) = self
            .locate(&command.key)
            .map(|(name, index)| (name.to_string(), index))
            .ok_or_else(|| BoardError::UnknownRecord {
                key: command.key.clone(),
            })?;

        if let Some(keys) = self.buckets.get_mut(&from_bucket) {
            keys.remove(index);
        }

        let target = self
            .buckets
            .get_mut(&command.to_bucket)
            .ok_or_else(|| BoardError::UnknownBucket {
                bucket: command.to_bucket.clone(),
            })?;
        let position = command.position.min(target.len());
        target.insert(position, command.key.clone());

        tracing::debug!(
            key = %command.key,
            from = %from_bucket,
            to = %command.to_bucket,
            position,
            "moved record on board"
        );

        Ok(MoveOutcome {
            from_bucket,
            bucket: command.to_bucket,
            position,
        })
    }
}
