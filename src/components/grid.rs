//! Grid component - Main movie table
//!
//! Renders the current page of rows as a sortable, filterable table with
//! row selection, a toolbar of create/export actions, and a pagination
//! footer. Owns view state only; rows live in `CatalogState`.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::model::{CatalogState, Column, FetchState, Movie, Row, RowCollection, RowId};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table, TableState},
    Frame,
};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use unicode_width::UnicodeWidthChar;

// ═══════════════════════════════════════════════════════════════════════════════
// Sorting
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }
}

fn compare_values(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Cut `text` to at most `width` display columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

// ═══════════════════════════════════════════════════════════════════════════════
// Grid Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Grid view state: cursor, column layout, sort, filters and selection
pub struct GridComponent {
    /// Row cursor over the visible rows
    pub table_state: TableState,

    /// Display order of the columns
    pub column_order: Vec<Column>,

    /// Index into `column_order` of the focused column
    pub focused_column: usize,

    /// Active sort, if any
    pub sort: Option<(Column, SortDirection)>,

    /// Global filter text
    pub search_query: String,

    /// Whether global filter input is active
    pub search_mode: bool,

    /// Per-column filter text
    pub column_filters: BTreeMap<Column, String>,

    /// Rows checked for "Export Selected"
    pub selected_rows: HashSet<RowId>,
}

impl Default for GridComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GridComponent {
    pub fn new() -> Self {
        Self {
            table_state: TableState::default(),
            column_order: Column::ALL.to_vec(),
            focused_column: 0,
            sort: None,
            search_query: String::new(),
            search_mode: false,
            column_filters: BTreeMap::new(),
            selected_rows: HashSet::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Visible Rows
    // ─────────────────────────────────────────────────────────────────────────

    fn matches_filters(&self, movie: &Movie) -> bool {
        if !self.search_query.is_empty() {
            let query = self.search_query.to_lowercase();
            let hit = Column::ALL
                .iter()
                .any(|c| c.value(movie).to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }

        self.column_filters.iter().all(|(column, text)| {
            column
                .value(movie)
                .to_lowercase()
                .contains(&text.to_lowercase())
        })
    }

    /// Rows after filtering and sorting, in display order
    pub fn visible_rows<'a>(&self, rows: &'a RowCollection) -> Vec<&'a Row> {
        let mut visible: Vec<&Row> = rows
            .iter()
            .filter(|row| self.matches_filters(&row.movie))
            .collect();

        if let Some((column, direction)) = self.sort {
            visible.sort_by(|a, b| {
                let ord = compare_values(column.value(&a.movie), column.value(&b.movie));
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        visible
    }

    /// The row under the cursor
    pub fn focused_row<'a>(&self, rows: &'a RowCollection) -> Option<&'a Row> {
        let index = self.table_state.selected()?;
        self.visible_rows(rows).get(index).copied()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Row Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next(&mut self, rows: &RowCollection) {
        let count = self.visible_rows(rows).len();
        if count == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < count => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn previous(&mut self, rows: &RowCollection) {
        let count = self.visible_rows(rows).len();
        if count == 0 {
            return;
        }
        let prev = match self.table_state.selected() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(prev));
    }

    pub fn select_first(&mut self, rows: &RowCollection) {
        if self.visible_rows(rows).is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self, rows: &RowCollection) {
        let count = self.visible_rows(rows).len();
        if count > 0 {
            self.table_state.select(Some(count - 1));
        }
    }

    /// Keep the cursor and selection valid after rows changed
    pub fn sync_with_rows(&mut self, rows: &RowCollection) {
        self.selected_rows.retain(|id| rows.contains(*id));

        let count = self.visible_rows(rows).len();
        match self.table_state.selected() {
            _ if count == 0 => self.table_state.select(None),
            None => self.table_state.select(Some(0)),
            Some(i) if i >= count => self.table_state.select(Some(count - 1)),
            Some(_) => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Columns
    // ─────────────────────────────────────────────────────────────────────────

    pub fn focused_column(&self) -> Column {
        self.column_order
            .get(self.focused_column)
            .copied()
            .unwrap_or(Column::Title)
    }

    pub fn next_column(&mut self) {
        self.focused_column = (self.focused_column + 1) % self.column_order.len();
    }

    pub fn previous_column(&mut self) {
        self.focused_column = self
            .focused_column
            .checked_sub(1)
            .unwrap_or(self.column_order.len() - 1);
    }

    /// Cycle the sort on the focused column; unsortable columns are ignored
    pub fn cycle_sort(&mut self) -> bool {
        let column = self.focused_column();
        if !column.is_sortable() {
            return false;
        }
        self.sort = match self.sort {
            Some((c, SortDirection::Ascending)) if c == column => {
                Some((column, SortDirection::Descending))
            }
            Some((c, SortDirection::Descending)) if c == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
        true
    }

    /// Swap the focused column with its neighbour; fixed columns never move
    fn move_column(&mut self, left: bool) -> bool {
        let from = self.focused_column;
        let to = if left {
            match from.checked_sub(1) {
                Some(to) => to,
                None => return false,
            }
        } else {
            if from + 1 >= self.column_order.len() {
                return false;
            }
            from + 1
        };

        if !self.column_order[from].is_reorderable() || !self.column_order[to].is_reorderable() {
            return false;
        }
        self.column_order.swap(from, to);
        self.focused_column = to;
        true
    }

    pub fn move_column_left(&mut self) -> bool {
        self.move_column(true)
    }

    pub fn move_column_right(&mut self) -> bool {
        self.move_column(false)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn search_input(&mut self, c: char, rows: &RowCollection) {
        self.search_query.push(c);
        self.select_first(rows);
    }

    pub fn search_backspace(&mut self, rows: &RowCollection) {
        self.search_query.pop();
        self.select_first(rows);
    }

    /// Set a column filter; empty text removes it
    pub fn set_column_filter(&mut self, column: Column, text: String, rows: &RowCollection) {
        if text.is_empty() {
            self.column_filters.remove(&column);
        } else {
            self.column_filters.insert(column, text);
        }
        self.select_first(rows);
    }

    pub fn column_filter(&self, column: Column) -> &str {
        self.column_filters
            .get(&column)
            .map(String::as_str)
            .unwrap_or("")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_selection(&mut self, rows: &RowCollection) {
        if let Some(row) = self.focused_row(rows) {
            let id = row.id;
            if !self.selected_rows.remove(&id) {
                self.selected_rows.insert(id);
            }
        }
    }

    /// Select every visible row
    pub fn select_all(&mut self, rows: &RowCollection) {
        for row in self.visible_rows(rows) {
            self.selected_rows.insert(row.id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_rows.clear();
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_rows.is_empty()
    }

    /// Checked rows in collection order
    pub fn selected_movies<'a>(&self, rows: &'a RowCollection) -> Vec<&'a Movie> {
        rows.iter()
            .filter(|row| self.selected_rows.contains(&row.id))
            .map(|row| &row.movie)
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for GridComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            // Rows
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstRow),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastRow),

            // Columns
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextColumn),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevColumn),
            KeyCode::Char('<') => Some(Action::MoveColumnLeft),
            KeyCode::Char('>') => Some(Action::MoveColumnRight),
            KeyCode::Char('s') => Some(Action::CycleSort),

            // Pages
            KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::PageDown => Some(Action::NextPage),
            KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::PageUp => Some(Action::PrevPage),

            // Filters
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('f') => Some(Action::OpenColumnFilter),

            // Selection
            KeyCode::Char('a') if ctrl => Some(Action::SelectAllRows),
            KeyCode::Char(' ') => Some(Action::ToggleRowSelection),
            KeyCode::Esc if self.has_selection() => Some(Action::ClearSelection),

            // Row actions
            KeyCode::Char('c') => Some(Action::OpenCreateDialog),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::OpenEditDialog),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::OpenDeleteDialog),
            KeyCode::Char('y') => Some(Action::CopyTitle),

            // Export
            KeyCode::Char('x') => Some(Action::ExportAll),
            KeyCode::Char('X') => Some(Action::ExportSelected),

            // App
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::NextRow),
            MouseEventKind::ScrollUp => Some(Action::PrevRow),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_grid_screen which takes the catalog
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the grid screen
pub struct GridRenderContext<'a> {
    pub catalog: &'a CatalogState,
    pub status_message: Option<&'a str>,
}

/// Draw the grid screen
pub fn draw_grid_screen(
    frame: &mut Frame,
    area: Rect,
    grid: &mut GridComponent,
    ctx: &GridRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area, ctx.catalog.fetch.is_error());

    render_toolbar(frame, layout.toolbar, grid);
    if let Some(banner_area) = layout.banner {
        render_alert_banner(frame, banner_area, ctx.catalog.fetch.error_message());
    }
    render_table(frame, layout.grid, grid, ctx.catalog);
    render_detail(frame, layout.detail, grid, &ctx.catalog.rows);
    render_status_line(frame, layout.status, grid, ctx);
    render_help_bar(frame, layout.help, grid);

    Ok(())
}

fn toolbar_button(key: &str, label: &str, enabled: bool, color: Color) -> Vec<Span<'static>> {
    let (key_style, label_style) = if enabled {
        (
            Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
            Style::default().fg(color),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        )
    };
    vec![
        Span::styled(format!(" {} ", key), key_style),
        Span::styled(format!(" {}  ", label), label_style),
    ]
}

fn render_toolbar(frame: &mut Frame, area: Rect, grid: &GridComponent) {
    let mut spans = Vec::new();
    spans.extend(toolbar_button("c", "Create New Movie", true, Color::Magenta));
    spans.extend(toolbar_button("x", "Export All Data", true, Color::Cyan));
    spans.extend(toolbar_button(
        "X",
        "Export Selected Rows",
        grid.has_selection(),
        Color::Cyan,
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_alert_banner(frame: &mut Frame, area: Rect, detail: Option<&str>) {
    let mut spans = vec![Span::styled(
        " Error loading data ",
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(detail) = detail {
        spans.push(Span::styled(
            format!("  {}", detail),
            Style::default().fg(Color::Red),
        ));
    }
    let banner = Paragraph::new(Line::from(spans));
    frame.render_widget(banner, area);
}

fn header_label(grid: &GridComponent, column: Column, index: usize) -> Span<'static> {
    let mut label = column.label().to_string();
    if let Some((sorted, direction)) = grid.sort {
        if sorted == column {
            label.push_str(direction.indicator());
        }
    }
    if !grid.column_filter(column).is_empty() {
        label.push_str(" ⧩");
    }
    if column.is_copyable() {
        label.push_str(" ⧉");
    }

    let mut style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    if index == grid.focused_column {
        style = style.add_modifier(Modifier::UNDERLINED).fg(Color::Yellow);
    }
    Span::styled(label, style)
}

fn render_table(frame: &mut Frame, area: Rect, grid: &mut GridComponent, catalog: &CatalogState) {
    let title = match catalog.fetch {
        FetchState::Refetching => " Movies  ⟳ loading… ".to_string(),
        _ => {
            let mut title = format!(" Movies ({}) ", catalog.rows.len());
            if grid.has_selection() {
                title = format!(" Movies ({}) [{}✓] ", catalog.rows.len(), grid.selected_rows.len());
            }
            if !grid.search_query.is_empty() {
                title = format!("{} [filter:{}] ", title.trim_end(), grid.search_query);
            }
            title
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    if catalog.fetch.is_loading() && catalog.rows.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "Loading movies…",
            Style::default().fg(Color::Yellow),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let inner_width = area.width.saturating_sub(4) as usize;
    let widths: Vec<usize> = grid
        .column_order
        .iter()
        .map(|c| inner_width * c.width_percent() as usize / 100)
        .collect();

    let mut header_cells = vec![Cell::from("")];
    header_cells.extend(
        grid.column_order
            .iter()
            .enumerate()
            .map(|(i, column)| Cell::from(header_label(grid, *column, i))),
    );
    let header = TableRow::new(header_cells).height(1);

    let visible = grid.visible_rows(&catalog.rows);
    let table_rows: Vec<TableRow> = visible
        .iter()
        .map(|row| {
            let checked = grid.selected_rows.contains(&row.id);
            let marker = if checked { "●" } else { "○" };
            let marker_style = if checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut cells = vec![Cell::from(Span::styled(marker, marker_style))];
            for (column, width) in grid.column_order.iter().zip(&widths) {
                let text = truncate_to_width(column.value(&row.movie), *width);
                let style = match column {
                    Column::ImdbId => Style::default().fg(Color::DarkGray),
                    Column::Poster => Style::default().fg(Color::Blue),
                    _ => Style::default().fg(Color::White),
                };
                cells.push(Cell::from(Span::styled(text, style)));
            }
            TableRow::new(cells)
        })
        .collect();

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(
        grid.column_order
            .iter()
            .map(|c| Constraint::Percentage(c.width_percent())),
    );

    let table = Table::new(table_rows, constraints)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut grid.table_state);
}

fn render_detail(frame: &mut Frame, area: Rect, grid: &GridComponent, rows: &RowCollection) {
    let lines = match grid.focused_row(rows) {
        Some(row) => vec![
            Line::from(vec![
                Span::styled(
                    row.movie.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({}, {})", row.movie.year, row.movie.kind),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {}", row.movie.imdb_id),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
            Line::from(vec![
                Span::styled("poster: ", Style::default().fg(Color::DarkGray)),
                Span::styled(row.movie.poster.clone(), Style::default().fg(Color::Blue)),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            "No row selected",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, grid: &GridComponent, ctx: &GridRenderContext) {
    let catalog = ctx.catalog;
    let mut spans = vec![Span::styled(
        format!(
            " Page {} of {} · {} results ",
            catalog.pagination.page_index + 1,
            catalog.page_count(),
            catalog.row_count
        ),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if !grid.column_filters.is_empty() {
        let filters: Vec<String> = grid
            .column_filters
            .iter()
            .map(|(column, text)| format!("{}~{}", column.label(), text))
            .collect();
        spans.push(Span::styled(
            format!(" [{}] ", filters.join(", ")),
            Style::default().fg(Color::Magenta),
        ));
    }

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, grid: &GridComponent) {
    let key = |k: &str, color: Color| {
        Span::styled(
            format!(" {} ", k),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    let help_spans = if grid.search_mode {
        vec![
            key("Esc/Enter", Color::Yellow),
            Span::raw("Done  "),
            Span::styled(
                format!("Filter: {}_", grid.search_query),
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else {
        vec![
            key("q", Color::Yellow),
            Span::raw("Quit "),
            key("n/p", Color::Green),
            Span::raw("Page "),
            key("e", Color::Cyan),
            Span::raw("Edit "),
            key("d", Color::Red),
            Span::raw("Delete "),
            key("s", Color::Cyan),
            Span::raw("Sort "),
            key("/", Color::Cyan),
            Span::raw("Search "),
            key("f", Color::Cyan),
            Span::raw("Filter "),
            key("Space", Color::Green),
            Span::raw("Select "),
            key("?", Color::White),
            Span::raw("Help"),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(help_spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str, year: &str) -> Movie {
        Movie {
            title: title.to_string(),
            year: year.to_string(),
            imdb_id: id.to_string(),
            kind: "movie".to_string(),
            poster: "N/A".to_string(),
        }
    }

    fn rows() -> RowCollection {
        let mut rows = RowCollection::new();
        rows.replace_all(vec![
            movie("tt1", "Man of Steel", "2013"),
            movie("tt2", "Iron Man", "2008"),
            movie("tt3", "Rain Man", "1988"),
        ]);
        rows
    }

    fn titles(grid: &GridComponent, rows: &RowCollection) -> Vec<String> {
        grid.visible_rows(rows)
            .iter()
            .map(|r| r.movie.title.clone())
            .collect()
    }

    #[test]
    fn test_sort_cycles_through_directions() {
        let rows = rows();
        let mut grid = GridComponent::new();

        assert!(grid.cycle_sort());
        assert_eq!(titles(&grid, &rows), vec!["Iron Man", "Man of Steel", "Rain Man"]);

        grid.cycle_sort();
        assert_eq!(titles(&grid, &rows), vec!["Rain Man", "Man of Steel", "Iron Man"]);

        grid.cycle_sort();
        assert!(grid.sort.is_none());
        assert_eq!(titles(&grid, &rows), vec!["Man of Steel", "Iron Man", "Rain Man"]);
    }

    #[test]
    fn test_imdb_id_is_not_sortable() {
        let mut grid = GridComponent::new();
        grid.focused_column = 2;
        assert_eq!(grid.focused_column(), Column::ImdbId);
        assert!(!grid.cycle_sort());
        assert!(grid.sort.is_none());
    }

    #[test]
    fn test_global_and_column_filters_compose() {
        let rows = rows();
        let mut grid = GridComponent::new();

        grid.search_input('m', &rows);
        grid.search_input('a', &rows);
        grid.search_input('n', &rows);
        assert_eq!(titles(&grid, &rows).len(), 3);

        grid.set_column_filter(Column::Year, "19".to_string(), &rows);
        assert_eq!(titles(&grid, &rows), vec!["Rain Man"]);

        grid.set_column_filter(Column::Year, String::new(), &rows);
        assert!(grid.column_filters.is_empty());
    }

    #[test]
    fn test_imdb_id_keeps_its_position() {
        let mut grid = GridComponent::new();
        grid.focused_column = 1;
        assert!(!grid.move_column_right());

        grid.focused_column = 3;
        assert!(!grid.move_column_left());
        assert!(grid.move_column_right());
        assert_eq!(
            grid.column_order,
            vec![Column::Title, Column::Year, Column::ImdbId, Column::Poster, Column::Type]
        );
        assert_eq!(grid.focused_column(), Column::Type);
    }

    #[test]
    fn test_selection_follows_rows() {
        let mut rows = rows();
        let mut grid = GridComponent::new();
        grid.select_first(&rows);
        grid.toggle_selection(&rows);
        grid.next(&rows);
        grid.toggle_selection(&rows);

        let selected: Vec<&str> = grid
            .selected_movies(&rows)
            .iter()
            .map(|m| m.imdb_id.as_str())
            .collect();
        assert_eq!(selected, vec!["tt1", "tt2"]);

        rows.replace_all(vec![movie("tt9", "Batman", "1989")]);
        grid.sync_with_rows(&rows);
        assert!(!grid.has_selection());
        assert_eq!(grid.table_state.selected(), Some(0));
    }

    #[test]
    fn test_navigation_wraps() {
        let rows = rows();
        let mut grid = GridComponent::new();
        grid.select_first(&rows);

        grid.previous(&rows);
        assert_eq!(grid.table_state.selected(), Some(2));
        grid.next(&rows);
        assert_eq!(grid.table_state.selected(), Some(0));
    }

    #[test]
    fn test_select_all_only_takes_visible_rows() {
        let rows = rows();
        let mut grid = GridComponent::new();
        grid.set_column_filter(Column::Title, "iron".to_string(), &rows);

        grid.select_all(&rows);

        assert_eq!(grid.selected_rows.len(), 1);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Man of Steel", 20), "Man of Steel");
        assert_eq!(truncate_to_width("Man of Steel", 6), "Man o…");
        assert_eq!(truncate_to_width("Man", 0), "");
    }
}
