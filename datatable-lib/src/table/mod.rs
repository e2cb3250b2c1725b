//! Table view state.
//!
//! [`TableView`] owns the full record set plus everything derived from it:
//! the filtered rows, the active sort, the current page and the selection.
//! Every mutation ends in [`TableView::recompute`], which refreshes the page
//! slice and page count.

mod filter;
mod page;
mod selection;
mod sort;

pub use filter::{filter_by_name, name_matches};
pub use page::{page_count, page_range};
pub use selection::Selection;
pub use sort::{compare, sort_by_column, SortDirection};

use std::ops::Range;

use log::debug;

use crate::config::{SortToggle, TableConfig};
use crate::error::Result;
use crate::fetch::FetchState;
use crate::model::{Column, Record};

/// Searchable, sortable, paginated view over a record set.
#[derive(Debug, Clone)]
pub struct TableView {
    config: TableConfig,
    loading: bool,
    error: Option<String>,
    /// Full record set as delivered by the source.
    data: Vec<Record>,
    /// Rows surviving the search, in current sort order.
    filtered: Vec<Record>,
    query: String,
    /// 1-based. Not clamped; see [`TableView::change_page`].
    current_page: usize,
    sort_column: Option<Column>,
    /// `None` when the filtered order is not known to follow `sort_column`.
    sort_direction: Option<SortDirection>,
    selection: Selection,
    page_range: Range<usize>,
    page_count: usize,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl TableView {
    /// Create an empty view in the loading state.
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            loading: true,
            error: None,
            data: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            current_page: 1,
            sort_column: None,
            sort_direction: None,
            selection: Selection::new(),
            page_range: 0..0,
            page_count: 0,
        }
    }

    /// Create a view that already holds `records`.
    pub fn with_records(config: TableConfig, records: Vec<Record>) -> Self {
        let mut view = Self::new(config);
        view.loading = false;
        view.load(records);
        view
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Apply a fetch snapshot: mirror the loading flag and, once finished,
    /// load the delivered records.
    pub fn apply_fetch(&mut self, state: &FetchState) {
        self.loading = state.loading;
        self.error = state.error.clone();
        if !state.loading && state.error.is_none() {
            self.load(state.records.clone());
        }
    }

    /// Replace the full record set. The filtered rows become the new data in
    /// source order; the page number, query text and sort column are kept.
    pub fn load(&mut self, records: Vec<Record>) {
        debug!("Loading {} records into table", records.len());
        self.filtered = records.clone();
        self.data = records;
        self.sort_direction = None;
        self.recompute();
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Filter the full set by name and go back to page 1.
    ///
    /// The result is in source order; any previous sort is not re-applied.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.current_page = 1;
        self.filtered = filter_by_name(&self.data, query);
        self.sort_direction = None;
        debug!("Search {:?}: {} of {} records", query, self.filtered.len(), self.data.len());
        self.recompute();
    }

    /// Sort by `column`.
    ///
    /// A new column gets a stable ascending sort. Repeating the active column
    /// toggles according to [`TableConfig::sort_toggle`].
    pub fn sort(&mut self, column: Column) {
        if self.sort_column == Some(column) {
            match self.config.sort_toggle {
                SortToggle::Reverse => {
                    self.filtered.reverse();
                    self.sort_direction = self.sort_direction.map(SortDirection::flip);
                }
                SortToggle::Descending => {
                    let direction = self
                        .sort_direction
                        .map_or(SortDirection::Ascending, SortDirection::flip);
                    sort_by_column(&mut self.filtered, column, direction);
                    self.sort_direction = Some(direction);
                }
            }
        } else {
            sort_by_column(&mut self.filtered, column, SortDirection::Ascending);
            self.sort_column = Some(column);
            self.sort_direction = Some(SortDirection::Ascending);
        }
        debug!("Sort by {}: {:?}", column, self.sort_direction);
        self.recompute();
    }

    /// Go to page `page`.
    ///
    /// No bounds check happens here; out-of-range pages show no rows. Use
    /// [`next_page`](Self::next_page) / [`previous_page`](Self::previous_page)
    /// to respect the pager's enabled state.
    pub fn change_page(&mut self, page: usize) {
        self.current_page = page;
        self.recompute();
    }

    /// Advance one page if Next is enabled. Returns true if the page changed.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.change_page(self.current_page + 1);
        true
    }

    /// Go back one page if Previous is enabled. Returns true if the page changed.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.change_page(self.current_page - 1);
        true
    }

    /// Add (`checked`) or remove a record from the selection, keyed by email.
    pub fn select_row(&mut self, record: &Record, checked: bool) {
        if checked {
            self.selection.select(record);
        } else {
            self.selection.deselect(&record.email);
        }
        debug!("Row {} checked={}, {} selected", record.email, checked, self.selection.len());
    }

    /// Flip a record's selection. Returns true if it is now selected.
    pub fn toggle_row(&mut self, record: &Record) -> bool {
        let checked = self.selection.toggle(record);
        debug!("Row {} toggled to {}, {} selected", record.email, checked, self.selection.len());
        checked
    }

    /// Change the repeated-sort behavior. Takes effect on the next sort.
    pub fn set_sort_toggle(&mut self, toggle: SortToggle) {
        self.config.sort_toggle = toggle;
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Refresh the page slice and page count from the filtered rows and page number.
    pub fn recompute(&mut self) {
        let len = self.filtered.len();
        self.page_count = page_count(len, self.config.page_size);
        self.page_range = page_range(self.current_page, self.config.page_size, len);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Full record set.
    pub fn records(&self) -> &[Record] {
        &self.data
    }

    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> &[Record] {
        &self.filtered[self.page_range.clone()]
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Previous is enabled on every page after the first.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Next is enabled until the last page.
    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_column(&self) -> Option<Column> {
        self.sort_column
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort_direction
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, email: &str) -> bool {
        self.selection.contains(email)
    }

    /// Selected rows as a JSON array.
    pub fn selected_json(&self) -> Result<String> {
        self.selection.to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                Record::new(
                    format!("Person {:02}", n - i),
                    format!("555-{:04}", i),
                    format!("p{}@example.com", i),
                    format!("{} Main St", i),
                )
            })
            .collect()
    }

    #[test]
    fn test_new_view_is_loading_and_empty() {
        let view = TableView::default();
        assert!(view.is_loading());
        assert!(view.page_rows().is_empty());
        assert_eq!(view.page_count(), 0);
        assert!(!view.has_next());
        assert!(!view.has_previous());
    }

    #[test]
    fn test_apply_fetch() {
        let mut view = TableView::default();
        view.apply_fetch(&FetchState {
            loading: false,
            records: records(3),
            error: None,
        });
        assert!(!view.is_loading());
        assert_eq!(view.filtered().len(), 3);

        view.apply_fetch(&FetchState {
            loading: false,
            records: Vec::new(),
            error: Some("boom".into()),
        });
        assert_eq!(view.error(), Some("boom"));
        assert_eq!(view.filtered().len(), 3);
    }

    #[test]
    fn test_search_resets_page() {
        let mut view = TableView::with_records(TableConfig::default(), records(60));
        view.change_page(3);
        view.search("person 1");
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.filtered().len(), 10);
    }

    #[test]
    fn test_descending_toggle() {
        let config = TableConfig::default().with_sort_toggle(SortToggle::Descending);
        let mut view = TableView::with_records(config, records(5));
        view.sort(Column::Email);
        view.sort(Column::Email);
        assert_eq!(view.sort_direction(), Some(SortDirection::Descending));
        let emails: Vec<_> = view.filtered().iter().map(|r| r.email.as_str()).collect();
        assert_eq!(
            emails,
            ["p4@example.com", "p3@example.com", "p2@example.com", "p1@example.com", "p0@example.com"]
        );
        view.sort(Column::Email);
        assert_eq!(view.sort_direction(), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_reverse_after_search_has_no_direction() {
        let mut view = TableView::with_records(TableConfig::default(), records(5));
        view.sort(Column::Name);
        view.search("");
        view.sort(Column::Name);
        assert_eq!(view.sort_column(), Some(Column::Name));
        assert_eq!(view.sort_direction(), None);
    }

    #[test]
    fn test_page_zero_shows_nothing() {
        let mut view = TableView::with_records(TableConfig::default(), records(10));
        view.change_page(0);
        assert!(view.page_rows().is_empty());
        assert!(!view.has_previous());
    }
}
