//! Sort stage

use crate::core::{FieldValue, Record, SortDirection};

/// Stable sort of `records` by one field.
///
/// Descending order uses the ascending comparator with the direction
/// multiplier applied, so ties keep their input order in both directions.
/// Records without the field sort as `Null`, ahead of every value when
/// ascending.
pub fn sort<R: Record>(records: &[R], key: &str, direction: SortDirection) -> Vec<R> {
    let mut keyed: Vec<(FieldValue, &R)> = records
        .iter()
        .map(|record| (record.field_value(key).unwrap_or(FieldValue::Null), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.total_cmp(b)));

    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Whether any record exposes a value for `key`
pub fn has_field<R: Record>(records: &[R], key: &str) -> bool {
    records.iter().any(|record| record.field_value(key).is_some())
}
