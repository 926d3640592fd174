//! Catalog state - rows, pagination and fetch coordination
//!
//! Owns the row collection, the pagination cursor, the fetch lifecycle and
//! the UI-local editing state (validation errors, pending deletion target).
//! Exactly one remote read is issued per pagination change; all row
//! mutations are local only.

use super::column::Column;
use super::fetch_state::FetchState;
use super::movie::Movie;
use super::pagination::PaginationCursor;
use super::rows::{RowCollection, RowId};
use super::validation::{CellId, ValidationErrors};
use crate::services::{FetchOutcome, FetchRunner};

/// Result of saving an edited row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Validation errors are pending
    Blocked,
    /// The row was replaced by a page load while the form was open
    RowGone,
}

/// Data and pagination state for the movie grid
pub struct CatalogState {
    /// Rows currently displayed
    pub rows: RowCollection,

    /// Total reported by the last successful response
    pub row_count: u64,

    /// Current pagination cursor
    pub pagination: PaginationCursor,

    /// Fetch lifecycle
    pub fetch: FetchState,

    /// Per-cell validation messages for the row being edited
    pub validation_errors: ValidationErrors,

    /// Row targeted by the delete confirmation dialog
    pub pending_delete: Option<RowId>,

    fetcher: FetchRunner,
}

impl CatalogState {
    pub fn new(fetcher: FetchRunner, pagination: PaginationCursor) -> Self {
        Self {
            rows: RowCollection::new(),
            row_count: 0,
            pagination,
            fetch: FetchState::Idle,
            validation_errors: ValidationErrors::new(),
            pending_delete: None,
            fetcher,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fetching
    // ─────────────────────────────────────────────────────────────────────────

    /// Issue the initial fetch
    pub fn mount(&mut self) {
        self.start_fetch();
    }

    fn start_fetch(&mut self) {
        self.fetch = FetchState::begin(!self.rows.is_empty());
        self.fetcher.spawn(self.pagination);
    }

    /// Move to a new cursor; fetches only if the cursor actually changed
    ///
    /// Returns true when a request was issued.
    pub fn set_pagination(&mut self, cursor: PaginationCursor) -> bool {
        let cursor = PaginationCursor::new(cursor.page_index, cursor.page_size);
        if cursor == self.pagination {
            return false;
        }
        self.pagination = cursor;
        self.start_fetch();
        true
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.row_count)
    }

    pub fn next_page(&mut self) -> bool {
        let next = self.pagination.page_index + 1;
        if next >= self.page_count() {
            return false;
        }
        self.set_pagination(self.pagination.with_page_index(next))
    }

    pub fn prev_page(&mut self) -> bool {
        match self.pagination.page_index.checked_sub(1) {
            Some(prev) => self.set_pagination(self.pagination.with_page_index(prev)),
            None => false,
        }
    }

    /// Apply a finished request, if any; returns true when state changed
    pub fn poll(&mut self) -> bool {
        let Some(outcome) = self.fetcher.poll() else {
            return false;
        };

        match outcome {
            FetchOutcome::Loaded { cursor, page } => {
                tracing::info!(
                    page = cursor.remote_page(),
                    rows = page.search.len(),
                    total = page.total_results,
                    "page loaded"
                );
                self.rows.replace_all(page.search);
                self.row_count = page.total_results;
                self.fetch = FetchState::Succeeded;
            }
            FetchOutcome::Failed { cursor, error } => {
                tracing::error!(page = cursor.remote_page(), error = %error, "page fetch failed");
                self.fetch = FetchState::Failed(error.to_string());
            }
        }
        true
    }

    /// Stop any in-flight request without touching state
    pub fn shutdown(&mut self) {
        if self.fetcher.is_running() {
            tracing::debug!(page = self.pagination.remote_page(), "cancelling in-flight fetch");
        }
        self.fetcher.cancel();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Local Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a new row built from raw form values
    pub fn create_row(&mut self, movie: Movie) -> RowId {
        tracing::info!(imdb_id = %movie.imdb_id, "row created");
        self.rows.push(movie)
    }

    /// Re-validate one cell of the row being edited
    pub fn validate_cell(&mut self, row: RowId, column: Column, value: &str) -> bool {
        self.validation_errors
            .validate_cell(CellId { row, column }, value)
    }

    /// Replace a row with edited values
    ///
    /// Blocked while any validation error is pending.
    pub fn save_edit(&mut self, row: RowId, movie: Movie) -> SaveOutcome {
        if !self.rows.contains(row) {
            tracing::debug!(row = %row, "edited row no longer loaded");
            self.validation_errors.clear();
            return SaveOutcome::RowGone;
        }
        if !self.validation_errors.is_empty() {
            tracing::debug!(row = %row, pending = self.validation_errors.len(), "edit blocked");
            return SaveOutcome::Blocked;
        }
        self.rows.replace(row, movie);
        tracing::info!(row = %row, "row edited");
        SaveOutcome::Saved
    }

    pub fn cancel_edit(&mut self) {
        self.validation_errors.clear();
    }

    pub fn request_delete(&mut self, row: RowId) {
        self.pending_delete = Some(row);
    }

    /// Remove the pending deletion target
    pub fn confirm_delete(&mut self) -> Option<Movie> {
        let row = self.pending_delete.take()?;
        let removed = self.rows.remove(row);
        if let Some(ref movie) = removed {
            tracing::info!(imdb_id = %movie.imdb_id, "row deleted");
        }
        removed
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fetch_runner::tests::{movie, StubSource};
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn catalog(source: Arc<StubSource>) -> CatalogState {
        CatalogState::new(FetchRunner::new(source), PaginationCursor::new(0, 10))
    }

    fn settle(catalog: &mut CatalogState) {
        for _ in 0..200 {
            if catalog.poll() {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("fetch did not finish");
    }

    fn man_of_steel() -> Movie {
        Movie {
            title: "Man of Steel".to_string(),
            year: "2013".to_string(),
            imdb_id: "tt0770828".to_string(),
            kind: "movie".to_string(),
            poster: "http://example.com/mos.jpg".to_string(),
        }
    }

    fn loaded(pages: Vec<(u32, Vec<Movie>)>, total: u64) -> (CatalogState, Arc<StubSource>) {
        let mut stub = StubSource::default();
        for (page, movies) in pages {
            stub = stub.with_page(page, movies, total);
        }
        let source = Arc::new(stub);
        let mut state = catalog(source.clone());
        state.mount();
        settle(&mut state);
        (state, source)
    }

    #[test]
    fn test_first_page_scenario() {
        let source = Arc::new(StubSource::default().with_page(1, vec![man_of_steel()], 256));
        let mut state = catalog(source.clone());

        state.mount();
        assert!(state.fetch.is_loading());
        settle(&mut state);

        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.row_count, 256);
        assert!(!state.fetch.is_error());
        assert_eq!(state.fetch, FetchState::Succeeded);
        assert_eq!(source.requested_pages(), vec![1]);
    }

    #[test]
    fn test_page_change_issues_one_request_and_refetches() {
        let (mut state, source) = loaded(
            vec![(1, vec![movie("tt1")]), (2, vec![movie("tt2"), movie("tt3")])],
            20,
        );

        assert!(state.next_page());
        assert!(state.fetch.is_refetching());
        settle(&mut state);

        assert_eq!(source.requested_pages(), vec![1, 2]);
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.pagination.page_index, 1);
    }

    #[test]
    fn test_same_cursor_does_not_refetch() {
        let (mut state, source) = loaded(vec![(1, vec![movie("tt1")])], 1);

        assert!(!state.set_pagination(PaginationCursor::new(0, 10)));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_page_size_change_refetches() {
        let (mut state, source) = loaded(vec![(1, vec![movie("tt1")])], 1);

        assert!(state.set_pagination(PaginationCursor::new(0, 25)));
        settle(&mut state);

        // Page size is not part of the request, only the page number
        assert_eq!(source.requested_pages(), vec![1, 1]);
    }

    #[test]
    fn test_failure_keeps_rows_and_clears_progress() {
        let source = Arc::new(
            StubSource::default()
                .with_page(1, vec![movie("tt1"), movie("tt2")], 30)
                .with_failure(2, "Request limit reached!"),
        );
        let mut state = catalog(source);
        state.mount();
        settle(&mut state);

        state.next_page();
        settle(&mut state);

        assert!(state.fetch.is_error());
        assert!(!state.fetch.is_loading());
        assert!(!state.fetch.is_refetching());
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.row_count, 30);
    }

    #[test]
    fn test_superseded_page_never_lands() {
        let source = Arc::new(
            StubSource::default()
                .with_page(1, vec![movie("tt1")], 30)
                .with_page(2, vec![movie("slow")], 30)
                .with_delay(2, Duration::from_millis(150))
                .with_page(3, vec![movie("fast")], 30),
        );
        let mut state = catalog(source);
        state.mount();
        settle(&mut state);

        state.next_page();
        state.next_page();
        settle(&mut state);
        thread::sleep(Duration::from_millis(200));
        assert!(!state.poll());

        let ids: Vec<&str> = state.rows.movies().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["fast"]);
        assert_eq!(state.pagination.page_index, 2);
    }

    #[test]
    fn test_pagination_bounds() {
        let (mut state, source) = loaded(vec![(1, vec![movie("tt1")])], 10);

        assert!(!state.prev_page());
        assert!(!state.next_page());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_edit_with_valid_fields_replaces_in_place() {
        let (mut state, _) = loaded(vec![(1, vec![movie("tt1"), movie("tt2")])], 2);
        let target = state.rows.iter().nth(1).unwrap().id;
        let mut edited = movie("tt2");
        edited.title = "Renamed".to_string();

        assert!(state.validate_cell(target, Column::Title, &edited.title));
        assert_eq!(state.save_edit(target, edited), SaveOutcome::Saved);

        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.rows.get(target).unwrap().title, "Renamed");
    }

    #[test]
    fn test_edit_with_empty_field_is_blocked() {
        let (mut state, _) = loaded(vec![(1, vec![movie("tt1")])], 1);
        let target = state.rows.iter().next().unwrap().id;
        let mut edited = movie("tt1");
        edited.year = String::new();

        assert!(!state.validate_cell(target, Column::Year, &edited.year));
        assert_eq!(state.save_edit(target, edited), SaveOutcome::Blocked);

        assert_eq!(state.rows.get(target).unwrap().year, "2013");
        let cell = CellId {
            row: target,
            column: Column::Year,
        };
        assert_eq!(state.validation_errors.get(&cell), Some("Year is required"));

        state.cancel_edit();
        assert!(state.validation_errors.is_empty());
    }

    #[test]
    fn test_delete_after_confirm() {
        let (mut state, _) = loaded(vec![(1, vec![movie("tt1"), movie("tt2")])], 2);
        let target = state.rows.iter().next().unwrap().id;

        state.request_delete(target);
        let removed = state.confirm_delete().unwrap();

        assert_eq!(removed.imdb_id, "tt1");
        assert_eq!(state.rows.len(), 1);
        assert!(!state.rows.movies().any(|m| m.imdb_id == "tt1"));
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn test_delete_cancel_leaves_rows() {
        let (mut state, _) = loaded(vec![(1, vec![movie("tt1"), movie("tt2")])], 2);
        let target = state.rows.iter().next().unwrap().id;

        state.request_delete(target);
        state.cancel_delete();

        assert!(state.confirm_delete().is_none());
        assert_eq!(state.rows.len(), 2);
    }

    #[test]
    fn test_create_appends_without_uniqueness_check() {
        let (mut state, _) = loaded(vec![(1, vec![movie("tt1")])], 1);

        state.create_row(movie("tt1"));

        assert_eq!(state.rows.len(), 2);
    }

    #[test]
    fn test_edit_of_replaced_row_reports_row_gone() {
        let (mut state, _) = loaded(vec![(1, vec![movie("tt1")])], 1);
        let stale = state.rows.iter().next().unwrap().id;
        state.rows.replace_all(vec![movie("tt9")]);

        assert!(!state.validate_cell(stale, Column::Title, ""));
        assert_eq!(state.save_edit(stale, movie("tt1")), SaveOutcome::RowGone);

        assert!(state.validation_errors.is_empty());
        let ids: Vec<&str> = state.rows.movies().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["tt9"]);
    }
}
