//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that routes input to the grid or the top modal and applies the resulting
//! Actions to the catalog and view state.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_grid_screen, CreateDialog, DeleteDialog, EditDialog, FilterDialog, GridComponent,
    GridRenderContext, HelpDialog, QuitDialog,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{CatalogState, Movie, PaginationCursor, SaveOutcome};
use crate::services::{CsvExporter, FetchRunner, MovieSource};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Rows, pagination and fetch lifecycle
    pub catalog: CatalogState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// CSV writer for the export actions
    pub exporter: CsvExporter,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Title waiting to be copied (set by CopyTitle, handled by main loop)
    pub pending_clipboard: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub grid: GridComponent,
    pub create_dialog: CreateDialog,
    pub edit_dialog: EditDialog,
    pub delete_dialog: DeleteDialog,
    pub filter_dialog: FilterDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App reading pages from `source`
    pub fn new(config: &Config, source: Arc<dyn MovieSource>) -> App {
        let pagination = PaginationCursor::new(0, config.page_size);
        App {
            catalog: CatalogState::new(FetchRunner::new(source), pagination),
            modals: ModalStack::new(),
            exporter: CsvExporter::new(config.export_dir.clone(), config.export_stem.clone()),
            should_quit: false,
            status_message: None,
            pending_clipboard: None,
            grid: GridComponent::new(),
            create_dialog: CreateDialog::default(),
            edit_dialog: EditDialog::default(),
            delete_dialog: DeleteDialog::default(),
            filter_dialog: FilterDialog::default(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    /// Cancel any in-flight request
    pub fn shutdown(&mut self) {
        self.catalog.shutdown();
    }

    /// Focused row id and a copy of its movie
    fn focused(&self) -> Option<(crate::model::RowId, Movie)> {
        self.grid
            .focused_row(&self.catalog.rows)
            .map(|row| (row.id, row.movie.clone()))
    }

    fn export(&mut self, selected_only: bool) {
        let movies: Vec<&Movie> = if selected_only {
            self.grid.selected_movies(&self.catalog.rows)
        } else {
            self.catalog.rows.movies().collect()
        };

        if selected_only && movies.is_empty() {
            self.status_message = Some("No rows selected".to_string());
            return;
        }

        let count = movies.len();
        match self.exporter.export(movies) {
            Ok(path) => {
                self.status_message =
                    Some(format!("Exported {} rows to {}", count, path.display()));
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.status_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    fn save_edit(&mut self, movie: Movie) {
        let Some(Modal::EditMovie { row }) = self.modals.top().cloned() else {
            return;
        };

        // The focused field never lost focus, so validate it now
        if let Some(field) = self.edit_dialog.form.focused_field() {
            if field.editable {
                let (column, value) = (field.column, field.value.clone());
                self.catalog.validate_cell(row, column, &value);
            }
        }

        match self.catalog.save_edit(row, movie) {
            SaveOutcome::Saved => {
                self.modals.pop();
                self.grid.sync_with_rows(&self.catalog.rows);
                self.status_message = Some("Row saved".to_string());
            }
            SaveOutcome::Blocked => {
                self.status_message =
                    Some("Fix the highlighted fields before saving".to_string());
            }
            SaveOutcome::RowGone => {
                self.modals.pop();
                self.status_message =
                    Some("That row is no longer on this page; edit discarded".to_string());
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.catalog.mount();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else if self.grid.search_mode {
            self.handle_search_key_event(key)
        } else {
            self.grid.handle_key_event(key)
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        self.grid.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            tracing::debug!(action = %action, "dispatch");
        }

        let rows = &self.catalog.rows;
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.catalog.poll() {
                    self.grid.sync_with_rows(&self.catalog.rows);
                }
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to GridComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextRow => self.grid.next(rows),
            Action::PrevRow => self.grid.previous(rows),
            Action::FirstRow => self.grid.select_first(rows),
            Action::LastRow => self.grid.select_last(rows),
            Action::NextColumn => self.grid.next_column(),
            Action::PrevColumn => self.grid.previous_column(),

            // ─────────────────────────────────────────────────────────────────
            // Pagination
            // ─────────────────────────────────────────────────────────────────
            Action::NextPage => {
                if !self.catalog.next_page() {
                    self.status_message = Some("Already on the last page".to_string());
                }
            }
            Action::PrevPage => {
                if !self.catalog.prev_page() {
                    self.status_message = Some("Already on the first page".to_string());
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Sorting & Column Layout
            // ─────────────────────────────────────────────────────────────────
            Action::CycleSort => {
                if !self.grid.cycle_sort() {
                    self.status_message = Some(format!(
                        "{} cannot be sorted",
                        self.grid.focused_column().label()
                    ));
                }
            }
            Action::MoveColumnLeft => {
                self.grid.move_column_left();
            }
            Action::MoveColumnRight => {
                self.grid.move_column_right();
            }

            // ─────────────────────────────────────────────────────────────────
            // Filtering
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.grid.enter_search_mode(),
            Action::ExitSearchMode => self.grid.exit_search_mode(),
            Action::SearchInput(c) => self.grid.search_input(c, rows),
            Action::SearchBackspace => self.grid.search_backspace(rows),
            Action::OpenColumnFilter => {
                let column = self.grid.focused_column();
                self.filter_dialog.open(column, self.grid.column_filter(column));
                self.modals.push(Modal::ColumnFilter { column });
            }
            Action::SetColumnFilter(column, text) => {
                self.grid.set_column_filter(column, text, rows);
                self.modals.pop();
            }
            Action::ClearColumnFilter(column) => {
                self.grid.set_column_filter(column, String::new(), rows);
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Selection
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleRowSelection => self.grid.toggle_selection(rows),
            Action::SelectAllRows => self.grid.select_all(rows),
            Action::ClearSelection => self.grid.clear_selection(),

            // ─────────────────────────────────────────────────────────────────
            // Row Actions
            // ─────────────────────────────────────────────────────────────────
            Action::CopyTitle => {
                if let Some((_, movie)) = self.focused() {
                    self.status_message = Some(format!("Copied \"{}\"", movie.title));
                    self.pending_clipboard = Some(movie.title);
                }
            }
            Action::OpenCreateDialog => {
                self.create_dialog.reset();
                self.modals.push(Modal::CreateMovie);
            }
            Action::SubmitCreate(movie) => {
                self.catalog.create_row(movie);
                self.modals.pop();
                self.grid.sync_with_rows(&self.catalog.rows);
                self.status_message = Some("Movie created".to_string());
            }
            Action::OpenEditDialog => {
                if let Some((row, movie)) = self.focused() {
                    self.catalog.validation_errors.clear();
                    self.edit_dialog.open(row, &movie);
                    self.modals.push(Modal::EditMovie { row });
                }
            }
            Action::ValidateCell(column, value) => {
                if let Some(Modal::EditMovie { row }) = self.modals.top().cloned() {
                    self.catalog.validate_cell(row, column, &value);
                }
            }
            Action::SaveEdit(movie) => self.save_edit(movie),
            Action::CancelEdit => {
                self.catalog.cancel_edit();
                self.modals.pop();
            }
            Action::OpenDeleteDialog => {
                if let Some((row, movie)) = self.focused() {
                    self.catalog.request_delete(row);
                    self.delete_dialog.open(&movie);
                    self.modals.push(Modal::DeleteConfirm);
                }
            }
            Action::ConfirmDelete => {
                if let Some(movie) = self.catalog.confirm_delete() {
                    self.status_message = Some(format!("Deleted \"{}\"", movie.title));
                }
                self.modals.pop();
                self.grid.sync_with_rows(&self.catalog.rows);
            }

            // ─────────────────────────────────────────────────────────────────
            // Export
            // ─────────────────────────────────────────────────────────────────
            Action::ExportAll => self.export(false),
            Action::ExportSelected => self.export(true),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                if !self.modals.contains(&Modal::QuitConfirm) {
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::OpenHelp => {
                if !self.modals.contains(&Modal::Help) {
                    self.help_dialog.scroll_offset = 0;
                    self.modals.push(Modal::Help);
                }
            }
            Action::CloseModal => match self.modals.pop() {
                Some(Modal::DeleteConfirm) => self.catalog.cancel_delete(),
                Some(Modal::EditMovie { .. }) => self.catalog.cancel_edit(),
                _ => {}
            },
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = GridRenderContext {
            catalog: &self.catalog,
            status_message: self.status_message.as_deref(),
        };
        draw_grid_screen(frame, area, &mut self.grid, &ctx)?;

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::CreateMovie => self.create_dialog.handle_key_event(key),
            Modal::EditMovie { .. } => self.edit_dialog.handle_key_event(key),
            Modal::DeleteConfirm => self.delete_dialog.handle_key_event(key),
            Modal::ColumnFilter { .. } => self.filter_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::CreateMovie => self.create_dialog.draw(frame, area)?,
            Modal::EditMovie { .. } => {
                self.edit_dialog
                    .draw_with_errors(frame, area, &self.catalog.validation_errors);
            }
            Modal::DeleteConfirm => self.delete_dialog.draw(frame, area)?,
            Modal::ColumnFilter { .. } => self.filter_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellId, Column, FetchState};
    use crate::services::fetch_runner::tests::{movie, StubSource};
    use ratatui::{backend::TestBackend, Terminal};
    use std::thread;
    use std::time::Duration;

    fn man_of_steel() -> Movie {
        Movie {
            title: "Man of Steel".to_string(),
            year: "2013".to_string(),
            imdb_id: "tt0770828".to_string(),
            kind: "movie".to_string(),
            poster: "https://m.media-amazon.com/images/M/MV5B.jpg".to_string(),
        }
    }

    fn loaded_app(source: StubSource, export_dir: &std::path::Path) -> App {
        let config = Config {
            export_dir: export_dir.to_path_buf(),
            ..Config::default()
        };
        let mut app = App::new(&config, Arc::new(source));
        app.init().unwrap();
        for _ in 0..200 {
            app.update(Action::Tick).unwrap();
            if !app.catalog.fetch.is_in_flight() {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dispatch(app: &mut App, code: KeyCode) {
        let mut action = app.handle_key_event(key(code)).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    #[test]
    fn test_first_page_renders() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = loaded_app(
            StubSource::default().with_page(1, vec![man_of_steel()], 256),
            dir.path(),
        );
        assert_eq!(app.catalog.fetch, FetchState::Succeeded);

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| {
                app.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Man of Steel"));
        assert!(text.contains("Page 1 of 26 · 256 results"));
    }

    #[test]
    fn test_failed_fetch_shows_banner() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = loaded_app(
            StubSource::default().with_failure(1, "Invalid API key!"),
            dir.path(),
        );
        assert!(app.catalog.fetch.is_error());

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|frame| {
                app.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Error loading data"));
    }

    #[test]
    fn test_delete_flow_removes_focused_row() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = loaded_app(
            StubSource::default().with_page(1, vec![movie("tt1"), movie("tt2")], 2),
            dir.path(),
        );

        dispatch(&mut app, KeyCode::Char('d'));
        assert_eq!(app.modals.top(), Some(&Modal::DeleteConfirm));
        dispatch(&mut app, KeyCode::Esc);
        assert_eq!(app.catalog.rows.len(), 2);
        assert!(app.catalog.pending_delete.is_none());

        dispatch(&mut app, KeyCode::Char('d'));
        dispatch(&mut app, KeyCode::Char('y'));
        assert!(app.modals.is_empty());
        let ids: Vec<&str> = app.catalog.rows.movies().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["tt2"]);
    }

    #[test]
    fn test_edit_with_empty_title_is_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = loaded_app(
            StubSource::default().with_page(1, vec![man_of_steel()], 1),
            dir.path(),
        );

        dispatch(&mut app, KeyCode::Char('e'));
        for _ in 0.."Man of Steel".len() {
            dispatch(&mut app, KeyCode::Backspace);
        }
        dispatch(&mut app, KeyCode::Enter);

        let Some(Modal::EditMovie { row }) = app.modals.top().cloned() else {
            panic!("edit dialog should stay open");
        };
        assert_eq!(
            app.catalog.validation_errors.get(&CellId { row, column: Column::Title }),
            Some("Title is required")
        );
        assert_eq!(app.catalog.rows.get(row).map(|m| m.title.as_str()), Some("Man of Steel"));

        for c in "Superman".chars() {
            dispatch(&mut app, KeyCode::Char(c));
        }
        dispatch(&mut app, KeyCode::Enter);

        assert!(app.modals.is_empty());
        assert!(app.catalog.validation_errors.is_empty());
        assert_eq!(app.catalog.rows.get(row).map(|m| m.title.as_str()), Some("Superman"));
        assert_eq!(app.catalog.rows.len(), 1);
    }

    #[test]
    fn test_create_appends_row() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = loaded_app(
            StubSource::default().with_page(1, vec![movie("tt1")], 1),
            dir.path(),
        );

        dispatch(&mut app, KeyCode::Char('c'));
        for c in "Superman".chars() {
            dispatch(&mut app, KeyCode::Char(c));
        }
        dispatch(&mut app, KeyCode::Enter);

        assert!(app.modals.is_empty());
        assert_eq!(app.catalog.rows.len(), 2);
        let last = app.catalog.rows.movies().last().cloned();
        assert_eq!(last.map(|m| m.title), Some("Superman".to_string()));
    }

    #[test]
    fn test_export_selected_without_selection_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = loaded_app(
            StubSource::default().with_page(1, vec![movie("tt1")], 1),
            dir.path(),
        );

        app.update(Action::ExportSelected).unwrap();

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        assert_eq!(app.status_message.as_deref(), Some("No rows selected"));
    }

    #[test]
    fn test_export_all_writes_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = loaded_app(
            StubSource::default().with_page(1, vec![movie("tt1"), movie("tt2")], 2),
            dir.path(),
        );

        app.update(Action::ExportAll).unwrap();

        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_paging_stops_at_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = loaded_app(
            StubSource::default().with_page(1, vec![movie("tt1")], 1),
            dir.path(),
        );

        app.update(Action::NextPage).unwrap();
        assert_eq!(app.catalog.pagination.page_index, 0);
        assert_eq!(app.status_message.as_deref(), Some("Already on the last page"));

        app.update(Action::PrevPage).unwrap();
        assert_eq!(app.status_message.as_deref(), Some("Already on the first page"));
    }

    #[test]
    fn test_copy_title_queues_clipboard() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = loaded_app(
            StubSource::default().with_page(1, vec![man_of_steel()], 1),
            dir.path(),
        );

        dispatch(&mut app, KeyCode::Char('y'));

        assert_eq!(app.pending_clipboard.as_deref(), Some("Man of Steel"));
    }

    #[test]
    fn test_save_after_page_change_discards_edit() {
        let dir = tempfile::tempdir().unwrap();
        let source = StubSource::default()
            .with_page(1, vec![movie("tt1")], 20)
            .with_page(2, vec![movie("tt2")], 20)
            .with_delay(2, Duration::from_millis(50));
        let mut app = loaded_app(source, dir.path());

        app.update(Action::NextPage).unwrap();
        dispatch(&mut app, KeyCode::Char('e'));
        assert!(matches!(app.modals.top(), Some(Modal::EditMovie { .. })));

        for _ in 0..200 {
            app.update(Action::Tick).unwrap();
            if !app.catalog.fetch.is_in_flight() {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        dispatch(&mut app, KeyCode::Enter);

        assert!(app.modals.is_empty());
        assert!(app.catalog.validation_errors.is_empty());
        assert_eq!(
            app.status_message.as_deref(),
            Some("That row is no longer on this page; edit discarded")
        );
        let ids: Vec<&str> = app.catalog.rows.movies().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["tt2"]);
    }
}
