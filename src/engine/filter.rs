//! Filter stage: free-text search and equality filters

use crate::core::{QueryDescriptor, Record};

/// Keep the records that match the descriptor's search text and filters.
///
/// A record passes the search when any of the `searchable` fields contains
/// the search text as a case-insensitive substring; empty search text passes
/// everything. Every filter must then accept the record (logical AND). The
/// result preserves input order and the input is left untouched.
pub fn filter<R: Record>(
    records: &[R],
    descriptor: &QueryDescriptor,
    searchable: &[String],
) -> Vec<R> {
    let needle = descriptor.search_text.to_lowercase();

    records
        .iter()
        .filter(|record| matches_search(*record, &needle, searchable))
        .filter(|record| {
            descriptor
                .filters
                .iter()
                .all(|(field, accepted)| accepted.accepts(record.field_value(field).as_ref()))
        })
        .cloned()
        .collect()
}

/// Case-insensitive search over the searchable fields.
///
/// `needle` must already be lowercased.
pub fn matches_search<R: Record>(record: &R, needle: &str, searchable: &[String]) -> bool {
    if needle.is_empty() {
        return true;
    }

    searchable.iter().any(|field| {
        record
            .search_value(field)
            .is_some_and(|value| value.contains_text(needle))
    })
}
