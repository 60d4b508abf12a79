//! Pagination stage

use crate::core::{Normalization, PaginationMeta};
use serde::Serialize;

/// One page of an ordered sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<R> {
    /// The records of this page
    pub records: Vec<R>,

    /// Page actually served (1-based, after clamping)
    pub page: usize,

    /// Page size actually used
    pub page_size: usize,

    /// Number of pages, at least 1
    pub total_pages: usize,

    /// Number of records across all pages
    pub total_count: usize,

    /// Adjustments made to the requested page or page size
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub normalizations: Vec<Normalization>,
}

impl<R> Page<R> {
    /// Metadata for rendering Previous/Next controls
    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta::new(self.page, self.page_size, self.total_count)
    }
}

/// Slice `records` into the requested page.
///
/// `page` is 1-based. A page or page size below 1 is raised to 1, and a page
/// past the end is clamped to the last page, so the call never fails.
pub fn paginate<R: Clone>(records: &[R], page: usize, page_size: usize) -> Page<R> {
    let mut normalizations = Vec::new();

    let applied_size = page_size.max(1);
    if applied_size != page_size {
        normalizations.push(Normalization::PageSizeClamped {
            requested: page_size,
            applied: applied_size,
        });
    }

    let total_count = records.len();
    let total_pages = total_count.div_ceil(applied_size).max(1);

    let applied_page = page.clamp(1, total_pages);
    if applied_page != page {
        normalizations.push(Normalization::PageClamped {
            requested: page,
            applied: applied_page,
        });
    }

    let start = (applied_page - 1) * applied_size;
    let end = (start + applied_size).min(total_count);

    Page {
        records: records[start.min(total_count)..end].to_vec(),
        page: applied_page,
        page_size: applied_size,
        total_pages,
        total_count,
        normalizations,
    }
}
