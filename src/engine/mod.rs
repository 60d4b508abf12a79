//! The list query engine
//!
//! Derives what a list view shows from a record collection and a
//! [`QueryDescriptor`]: filter, then sort, then (optionally) paginate, in
//! that fixed order. Every stage is a pure function of its inputs and never
//! fails; out-of-range input is normalized and reported through
//! [`Normalization`] notes.
//!
//! # Example
//!
//! ```rust,ignore
//! use hrms::prelude::*;
//!
//! let engine = ListQueryEngine::<Task>::new();
//! let descriptor = QueryDescriptor::new()
//!     .with_filter("priority", "high")
//!     .sorted_by("title", SortDirection::Ascending)
//!     .paged(1, 10);
//!
//! let view = engine.derive_view(&tasks, &descriptor);
//! println!("{}", view.summary()); // Showing 2 of 5 tasks
//! ```

pub mod filter;
pub mod list_view;
pub mod paginate;
pub mod sort;
pub mod view;

pub use list_view::ListView;
pub use paginate::Page;
pub use view::DerivedView;

use crate::core::{Normalization, QueryDescriptor, Record, SortDirection};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Per-view query configuration: which fields search and sort may use
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySchema {
    /// Fields matched by free-text search
    pub searchable: Vec<String>,

    /// Fields a sort may use; empty accepts any field the records expose
    #[serde(default)]
    pub sortable: Vec<String>,
}

impl QuerySchema {
    pub fn new<S: Into<String>>(
        searchable: impl IntoIterator<Item = S>,
        sortable: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            searchable: searchable.into_iter().map(Into::into).collect(),
            sortable: sortable.into_iter().map(Into::into).collect(),
        }
    }

    /// The schema a record type declares for itself
    pub fn for_record<R: Record>() -> Self {
        Self::new(
            R::searchable_fields().iter().copied(),
            R::sortable_fields().iter().copied(),
        )
    }

    /// Whether `key` is a known sort key for these records
    fn accepts_sort_key<R: Record>(&self, records: &[R], key: &str) -> bool {
        if self.sortable.is_empty() {
            sort::has_field(records, key)
        } else {
            self.sortable.iter().any(|field| field == key)
        }
    }
}

/// Query engine for one record type
#[derive(Debug, Clone)]
pub struct ListQueryEngine<R> {
    schema: QuerySchema,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Default for ListQueryEngine<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> ListQueryEngine<R> {
    /// Create an engine using the schema the record type declares
    pub fn new() -> Self {
        Self::with_schema(QuerySchema::for_record::<R>())
    }

    /// Create an engine with an explicit schema (e.g. from view configuration)
    pub fn with_schema(schema: QuerySchema) -> Self {
        Self {
            schema,
            _record: PhantomData,
        }
    }

    pub fn schema(&self) -> &QuerySchema {
        &self.schema
    }

    /// Apply search text and filters, preserving input order
    pub fn filter(&self, records: &[R], descriptor: &QueryDescriptor) -> Vec<R> {
        filter::filter(records, descriptor, &self.schema.searchable)
    }

    /// Stable sort by one key.
    ///
    /// An unknown key is a no-op: the input order is returned unchanged.
    pub fn sort(&self, records: &[R], key: &str, direction: SortDirection) -> Vec<R> {
        self.sort_checked(records, key, direction).0
    }

    /// Slice one page out of `records`
    pub fn paginate(&self, records: &[R], page: usize, page_size: usize) -> Page<R> {
        paginate::paginate(records, page, page_size)
    }

    /// Derive the view for a descriptor: filter, then sort, then paginate.
    pub fn derive_view(&self, records: &[R], descriptor: &QueryDescriptor) -> DerivedView<R> {
        let mut normalizations = Vec::new();

        let filtered = self.filter(records, descriptor);
        let filtered_count = filtered.len();

        let sorted = match &descriptor.sort {
            Some(spec) => {
                let (sorted, note) = self.sort_checked(&filtered, &spec.key, spec.direction);
                normalizations.extend(note);
                sorted
            }
            None => filtered,
        };

        let view = match descriptor.pagination {
            Some(request) => {
                let page = paginate::paginate(&sorted, request.page, request.page_size);
                for note in &page.normalizations {
                    tracing::debug!(record_type = R::record_type(), "{}", note);
                }
                normalizations.extend(page.normalizations);
                DerivedView {
                    view_records: page.records,
                    filtered_count,
                    total_count: records.len(),
                    total_pages: page.total_pages,
                    current_page: page.page,
                    page_size: Some(page.page_size),
                    normalizations,
                }
            }
            None => DerivedView {
                view_records: sorted,
                filtered_count,
                total_count: records.len(),
                total_pages: 1,
                current_page: 1,
                page_size: None,
                normalizations,
            },
        };

        tracing::debug!(
            record_type = R::record_type(),
            total = view.total_count,
            filtered = view.filtered_count,
            shown = view.view_records.len(),
            page = view.current_page,
            "derived list view"
        );

        view
    }

    fn sort_checked(
        &self,
        records: &[R],
        key: &str,
        direction: SortDirection,
    ) -> (Vec<R>, Option<Normalization>) {
        if !self.schema.accepts_sort_key(records, key) {
            // An empty collection has nothing to sort, whatever the key
            if records.is_empty() {
                return (Vec::new(), None);
            }
            tracing::warn!(
                record_type = R::record_type(),
                sort_key = key,
                "unknown sort key, keeping input order"
            );
            return (
                records.to_vec(),
                Some(Normalization::UnknownSortKey {
                    key: key.to_string(),
                }),
            );
        }

        (sort::sort(records, key, direction), None)
    }
}
