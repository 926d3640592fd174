//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub toolbar: Rect,
    pub banner: Option<Rect>,
    pub grid: Rect,
    pub detail: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
///
/// Toolbar on top, optional alert banner, the grid, a detail strip for the
/// focused row, then a status line and the help bar.
pub fn calculate_main_layout(area: Rect, show_banner: bool) -> MainLayout {
    let mut constraints = vec![Constraint::Length(1)];
    if show_banner {
        constraints.push(Constraint::Length(1));
    }
    constraints.extend([
        Constraint::Min(5),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let (banner, rest) = if show_banner {
        (Some(chunks[1]), 2)
    } else {
        (None, 1)
    };

    MainLayout {
        toolbar: chunks[0],
        banner,
        grid: chunks[rest],
        detail: chunks[rest + 1],
        status: chunks[rest + 2],
        help: chunks[rest + 3],
    }
}
