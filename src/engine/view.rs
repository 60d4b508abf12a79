//! Derived views: the composition of filter, sort and paginate

use crate::core::{Normalization, PaginationMeta, Record, RecordKey};
use serde::Serialize;

/// The ordered, possibly paginated subset of records a view renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView<R> {
    /// Records to render, in display order
    pub view_records: Vec<R>,

    /// Size of the collection after filtering, before pagination
    pub filtered_count: usize,

    /// Size of the original, unfiltered collection
    pub total_count: usize,

    /// Number of pages (1 when the view is not paginated)
    pub total_pages: usize,

    /// Page served, 1-based (1 when the view is not paginated)
    pub current_page: usize,

    /// Page size used, if the view is paginated
    pub page_size: Option<usize>,

    /// Adjustments made to out-of-range input while deriving
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub normalizations: Vec<Normalization>,
}

impl<R: Record> DerivedView<R> {
    /// An empty result is a state to render, not an error
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    /// "Showing N of M" summary, counting filtered records against the total
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} {}",
            self.filtered_count,
            self.total_count,
            R::collection_name().replace('_', " ")
        )
    }

    /// Pagination metadata, if the view is paginated
    pub fn pagination_meta(&self) -> Option<PaginationMeta> {
        self.page_size
            .map(|size| PaginationMeta::new(self.current_page, size, self.filtered_count))
    }

    /// Find a record of the view by key
    pub fn find(&self, key: &RecordKey) -> Option<&R> {
        self.view_records.iter().find(|record| &record.key() == key)
    }
}
