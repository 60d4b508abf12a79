//! Selection state for bulk actions

use crate::core::record::{Record, RecordKey};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The set of record keys currently checked for bulk actions.
///
/// The set is owned by the presenting view, not by the query engine. After
/// every derived view it must be reconciled with [`SelectionSet::retain_visible`]
/// so that no key outside the view survives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    keys: IndexSet<RecordKey>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection state of a key, returning whether it is now selected
    pub fn toggle(&mut self, key: RecordKey) -> bool {
        if self.keys.shift_remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn select(&mut self, key: RecordKey) -> bool {
        self.keys.insert(key)
    }

    pub fn deselect(&mut self, key: &RecordKey) -> bool {
        self.keys.shift_remove(key)
    }

    pub fn contains(&self, key: &RecordKey) -> bool {
        self.keys.contains(key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordKey> {
        self.keys.iter()
    }

    /// Select exactly the records of the current view.
    ///
    /// Keys outside the view are dropped, so "select all" never reaches into
    /// the unfiltered collection or other pages.
    pub fn select_all<R: Record>(&mut self, view_records: &[R]) {
        self.keys = view_records.iter().map(Record::key).collect();
    }

    /// Whether every record of the view is selected (and the view is non-empty)
    pub fn is_all_selected<R: Record>(&self, view_records: &[R]) -> bool {
        !view_records.is_empty() && view_records.iter().all(|r| self.keys.contains(&r.key()))
    }

    /// Drop every key not present in the view, returning the dropped keys
    pub fn retain_visible<R: Record>(&mut self, view_records: &[R]) -> Vec<RecordKey> {
        let visible: IndexSet<RecordKey> = view_records.iter().map(Record::key).collect();
        let mut dropped = Vec::new();
        self.keys.retain(|key| {
            let keep = visible.contains(key);
            if !keep {
                dropped.push(key.clone());
            }
            keep
        });
        dropped
    }
}

impl FromIterator<RecordKey> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = RecordKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
