//! In-memory implementation of RecordRepository for seeded views

use crate::core::{Record, RecordAction, RecordKey, RecordRepository, RepositoryError};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// In-memory record repository
///
/// The collection is seeded once and stays read-only for the session. Edit
/// and delete requests are logged and kept in an action log instead of
/// altering the records. Uses RwLock for thread-safe access.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<R: Record> {
    records: Arc<Vec<R>>,
    actions: Arc<RwLock<Vec<RecordAction>>>,
}

impl<R: Record> InMemoryRepository<R> {
    /// Seed a repository, rejecting duplicate keys
    pub fn seeded(records: Vec<R>) -> Result<Self, RepositoryError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            let key = record.key();
            if !seen.insert(key.clone()) {
                return Err(RepositoryError::DuplicateKey {
                    record_type: R::record_type(),
                    key,
                });
            }
        }

        tracing::debug!(
            record_type = R::record_type(),
            count = records.len(),
            "seeded in-memory repository"
        );

        Ok(Self {
            records: Arc::new(records),
            actions: Arc::new(RwLock::new(Vec::new())),
        })
    }

    /// Requests received so far, oldest first
    pub fn actions(&self) -> Result<Vec<RecordAction>> {
        let actions = self
            .actions
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(actions.clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn find(&self, key: &RecordKey) -> Option<&R> {
        self.records.iter().find(|record| &record.key() == key)
    }

    fn log_action(&self, action: RecordAction) -> Result<()> {
        let mut actions = self
            .actions
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        actions.push(action);

        Ok(())
    }
}

impl<R: Record + DeserializeOwned> InMemoryRepository<R> {
    /// Seed from a JSON array
    pub fn from_json_str(json: &str) -> Result<Self, RepositoryError> {
        let records: Vec<R> = serde_json::from_str(json).map_err(|e| RepositoryError::Seed {
            record_type: R::record_type(),
            message: e.to_string(),
        })?;
        Self::seeded(records)
    }

    /// Seed from a YAML sequence
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RepositoryError> {
        let records: Vec<R> = serde_yaml::from_str(yaml).map_err(|e| RepositoryError::Seed {
            record_type: R::record_type(),
            message: e.to_string(),
        })?;
        Self::seeded(records)
    }

    /// Seed from a JSON (`.json`) or YAML (anything else) file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RepositoryError::Seed {
            record_type: R::record_type(),
            message: format!("{}: {}", path.display(), e),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }
}

impl<R: Record> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self {
            records: Arc::new(Vec::new()),
            actions: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl<R: Record> RecordRepository<R> for InMemoryRepository<R> {
    async fn list_records(&self) -> Result<Vec<R>> {
        Ok(self.records.as_ref().clone())
    }

    async fn get(&self, key: &RecordKey) -> Result<Option<R>> {
        Ok(self.find(key).cloned())
    }

    async fn edit(&self, record: R) -> Result<()> {
        let key = record.key();
        if self.find(&key).is_none() {
            return Err(RepositoryError::NotFound {
                record_type: R::record_type(),
                key,
            }
            .into());
        }

        tracing::info!(record_type = R::record_type(), key = %key, "edit requested");
        self.log_action(RecordAction::Edit {
            record_type: R::record_type().to_string(),
            key,
        })
    }

    async fn delete(&self, key: &RecordKey) -> Result<()> {
        if self.find(key).is_none() {
            return Err(RepositoryError::NotFound {
                record_type: R::record_type(),
                key: key.clone(),
            }
            .into());
        }

        tracing::info!(record_type = R::record_type(), key = %key, "delete requested");
        self.log_action(RecordAction::Delete {
            record_type: R::record_type().to_string(),
            key: key.clone(),
        })
    }
}
