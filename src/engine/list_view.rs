//! Stateful list view: records, descriptor and selection owned by one view

use crate::core::{
    FilterValue, QueryDescriptor, Record, RecordKey, RecordRepository, SelectionSet, SortDirection,
};
use crate::engine::{DerivedView, ListQueryEngine};
use anyhow::Result;

/// The query state of one rendered list.
///
/// The records are seeded once and never change. Every mutation of the
/// descriptor re-derives the view and reconciles the selection with it, so
/// the selection never holds a key the view does not show.
#[derive(Debug, Clone)]
pub struct ListView<R: Record> {
    engine: ListQueryEngine<R>,
    records: Vec<R>,
    descriptor: QueryDescriptor,
    selection: SelectionSet,
    view: DerivedView<R>,
}

impl<R: Record> ListView<R> {
    pub fn new(engine: ListQueryEngine<R>, records: Vec<R>, descriptor: QueryDescriptor) -> Self {
        let view = engine.derive_view(&records, &descriptor);
        let mut list = Self {
            engine,
            records,
            descriptor,
            selection: SelectionSet::new(),
            view,
        };
        list.sync_page();
        list
    }

    /// Seed the view from a repository
    pub async fn from_repository<S>(
        engine: ListQueryEngine<R>,
        repository: &S,
        descriptor: QueryDescriptor,
    ) -> Result<Self>
    where
        S: RecordRepository<R> + ?Sized,
    {
        let records = repository.list_records().await?;
        Ok(Self::new(engine, records, descriptor))
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.descriptor
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The latest derived view
    pub fn view(&self) -> &DerivedView<R> {
        &self.view
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.descriptor.set_search_text(text);
        self.refresh();
    }

    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<FilterValue>) {
        self.descriptor.set_filter(field, value);
        self.refresh();
    }

    pub fn clear_filter(&mut self, field: &str) {
        if self.descriptor.clear_filter(field).is_some() {
            self.refresh();
        }
    }

    /// Click on a sortable column header
    pub fn select_sort_key(&mut self, key: impl Into<String>) -> SortDirection {
        let direction = self.descriptor.select_sort_key(key);
        self.refresh();
        direction
    }

    pub fn next_page(&mut self) {
        self.descriptor.next_page();
        self.refresh();
    }

    pub fn previous_page(&mut self) {
        self.descriptor.previous_page();
        self.refresh();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.descriptor.go_to_page(page);
        self.refresh();
    }

    /// Apply an arbitrary change to the descriptor
    pub fn update_descriptor(&mut self, change: impl FnOnce(&mut QueryDescriptor)) {
        change(&mut self.descriptor);
        self.refresh();
    }

    /// Toggle one record of the view, returning whether it is now selected.
    ///
    /// Keys outside the current view cannot be selected.
    pub fn toggle_selection(&mut self, key: &RecordKey) -> bool {
        if self.view.find(key).is_none() {
            return false;
        }
        self.selection.toggle(key.clone())
    }

    /// Select exactly the records of the current view
    pub fn select_all(&mut self) {
        self.selection.select_all(&self.view.view_records);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(&self.view.view_records)
    }

    /// Records a bulk action applies to, in view order
    pub fn selected_records(&self) -> Vec<&R> {
        self.view
            .view_records
            .iter()
            .filter(|record| self.selection.contains(&record.key()))
            .collect()
    }

    /// Re-derive the view and reconcile the selection with it
    pub fn refresh(&mut self) {
        self.view = self.engine.derive_view(&self.records, &self.descriptor);
        self.sync_page();

        let dropped = self.selection.retain_visible(&self.view.view_records);
        if !dropped.is_empty() {
            tracing::debug!(
                record_type = R::record_type(),
                dropped = dropped.len(),
                "selection keys left the view"
            );
        }
    }

    // The descriptor follows the page actually served so that Previous/Next
    // step from a valid page after clamping.
    fn sync_page(&mut self) {
        if let Some(request) = self.descriptor.pagination.as_mut() {
            request.page = self.view.current_page;
            request.page_size = self.view.page_size.unwrap_or(request.page_size);
        }
    }
}
