//! Query descriptors, query-string parameters and pagination utilities

use crate::core::field::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Filter value that accepts every record
pub const ALL_SENTINEL: &str = "all";

/// Maximum page size accepted from query strings
pub const MAX_PAGE_SIZE: usize = 100;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// The +1/-1 multiplier applied to the ascending comparator
    pub fn multiplier(self) -> i8 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }

    /// Apply the direction to an ascending ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self.multiplier() {
            1 => ordering,
            _ => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Sort key and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Parse a sort expression
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    ///
    /// Unknown directions fall back to ascending. Returns `None` for an
    /// empty field name.
    pub fn parse(expr: &str) -> Option<Self> {
        let (key, direction) = match expr.split_once(':') {
            Some((key, "desc")) => (key, SortDirection::Descending),
            Some((key, _)) => (key, SortDirection::Ascending),
            None => (expr, SortDirection::Ascending),
        };
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some(Self {
            key: key.to_string(),
            direction,
        })
    }
}

/// Accepted value of an equality filter
///
/// The literal string `"all"` deserializes to [`FilterValue::All`], a true
/// pass-through rather than an equality match against the text "all".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FieldValue", into = "FieldValue")]
pub enum FilterValue {
    All,
    Equals(FieldValue),
}

impl FilterValue {
    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    /// Does a record's field value pass this filter?
    ///
    /// A record without the field only passes the `All` filter.
    pub fn accepts(&self, value: Option<&FieldValue>) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Equals(accepted) => value.is_some_and(|v| v.matches(accepted)),
        }
    }
}

impl From<FieldValue> for FilterValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::String(s) if s == ALL_SENTINEL => FilterValue::All,
            other => FilterValue::Equals(other),
        }
    }
}

impl From<FilterValue> for FieldValue {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::All => FieldValue::String(ALL_SENTINEL.to_string()),
            FilterValue::Equals(v) => v,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::from(FieldValue::from(value))
    }
}

/// Requested page, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }
}

/// The current search/filter/sort/page selection of a view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDescriptor {
    /// Free-text term, matched case-insensitively against searchable fields
    pub search_text: String,

    /// Equality filters combined with logical AND, in insertion order
    pub filters: IndexMap<String, FilterValue>,

    pub sort: Option<SortSpec>,

    /// Absent when the view renders the full list without slicing
    pub pagination: Option<PageRequest>,
}

impl QueryDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    pub fn sorted_by(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec {
            key: key.into(),
            direction,
        });
        self
    }

    pub fn paged(mut self, page: usize, page_size: usize) -> Self {
        self.pagination = Some(PageRequest::new(page, page_size));
        self
    }

    /// Replace the search text, returning to the first page
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.reset_page();
    }

    /// Set or replace a filter, returning to the first page
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<FilterValue>) {
        self.filters.insert(field.into(), value.into());
        self.reset_page();
    }

    /// Remove a filter, returning to the first page
    pub fn clear_filter(&mut self, field: &str) -> Option<FilterValue> {
        let removed = self.filters.shift_remove(field);
        if removed.is_some() {
            self.reset_page();
        }
        removed
    }

    /// Select a sort key the way a sortable column header does.
    ///
    /// Re-selecting the current key toggles the direction; a new key starts
    /// ascending. Returns the resulting direction.
    pub fn select_sort_key(&mut self, key: impl Into<String>) -> SortDirection {
        let key = key.into();
        let direction = match &self.sort {
            Some(current) if current.key == key => current.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortSpec { key, direction });
        direction
    }

    pub fn go_to_page(&mut self, page: usize) {
        if let Some(request) = self.pagination.as_mut() {
            request.page = page.max(1);
        }
    }

    pub fn next_page(&mut self) {
        if let Some(request) = self.pagination.as_mut() {
            request.page = request.page.saturating_add(1);
        }
    }

    pub fn previous_page(&mut self) {
        if let Some(request) = self.pagination.as_mut() {
            request.page = request.page.saturating_sub(1).max(1);
        }
    }

    /// Filters that actually constrain the result (everything except "all")
    pub fn active_filters(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.filters.iter().filter_map(|(field, value)| match value {
            FilterValue::All => None,
            FilterValue::Equals(v) => Some((field, v)),
        })
    }

    fn reset_page(&mut self) {
        if let Some(request) = self.pagination.as_mut() {
            request.page = 1;
        }
    }
}

/// Query parameters for pagination, search and filtering
///
/// This structure is used to extract the query descriptor of a list view
/// from URL query strings. All parameters have sensible defaults.
///
/// # Example
/// ```text
/// ?page=2&limit=10
/// ?q=sharma&filter={"department": "Engineering"}
/// ?page=1&limit=20&filter={"priority": "high"}&sort=due_date:desc
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Free-text search
    pub q: Option<String>,

    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Filters as JSON object
    ///
    /// # Format
    /// `{"field": "value", "other": "all"}`
    pub filter: Option<String>,

    /// Sort field and direction (`field`, `field:asc`, `field:desc`)
    pub sort: Option<String>,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            q: None,
            page: default_page(),
            limit: default_limit(),
            filter: None,
            sort: None,
        }
    }
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, ensuring it doesn't exceed the maximum
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }

    /// Parse filter JSON string into Value
    pub fn filter_value(&self) -> Option<Value> {
        self.filter
            .as_ref()
            .and_then(|s| serde_json::from_str(s).ok())
    }

    /// Build the descriptor these parameters describe.
    ///
    /// Malformed filter JSON is ignored rather than rejected.
    pub fn into_descriptor(self) -> QueryDescriptor {
        let mut filters = IndexMap::new();
        if let Some(Value::Object(obj)) = self.filter_value() {
            for (field, value) in obj {
                filters.insert(field, FilterValue::from(FieldValue::from_json(&value)));
            }
        }

        QueryDescriptor {
            search_text: self.q.clone().unwrap_or_default(),
            filters,
            sort: self.sort.as_deref().and_then(SortSpec::parse),
            pagination: Some(PageRequest::new(self.page(), self.limit())),
        }
    }
}

/// Adjustment applied to out-of-range input while deriving a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Normalization {
    /// The requested page was outside `1..=total_pages`
    PageClamped { requested: usize, applied: usize },

    /// The requested page size was below 1
    PageSizeClamped { requested: usize, applied: usize },

    /// The sort key is not sortable for this view; input order was kept
    UnknownSortKey { key: String },
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalization::PageClamped { requested, applied } => {
                write!(f, "page {} clamped to {}", requested, applied)
            }
            Normalization::PageSizeClamped { requested, applied } => {
                write!(f, "page size {} clamped to {}", requested, applied)
            }
            Normalization::UnknownSortKey { key } => {
                write!(f, "unknown sort key '{}', keeping input order", key)
            }
        }
    }
}

/// Pagination metadata for rendering Previous/Next controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages, at least 1
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure limit is at least 1 to avoid division by zero
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit).max(1);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}
