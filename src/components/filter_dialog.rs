//! Column filter dialog component
//!
//! Text input for a case-insensitive "contains" filter on one column.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::Column;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Column filter dialog
pub struct FilterDialog {
    pub column: Column,
    pub input: String,
}

impl Default for FilterDialog {
    fn default() -> Self {
        Self {
            column: Column::Title,
            input: String::new(),
        }
    }
}

impl FilterDialog {
    /// Open for a column, seeded with its current filter text
    pub fn open(&mut self, column: Column, current: &str) {
        self.column = column;
        self.input = current.to_string();
    }
}

impl Component for FilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SetColumnFilter(self.column, self.input.clone())),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ClearColumnFilter(self.column))
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 50, 7);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("  {} contains: ", self.column.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{}_", self.input),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " Enter ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Apply  "),
                Span::styled(
                    " Ctrl+U ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Clear  "),
                Span::styled(
                    " Esc ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("Cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Filter {} ", self.column.label()))
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_applies_typed_text() {
        let mut dialog = FilterDialog::default();
        dialog.open(Column::Year, "20");
        dialog
            .handle_key_event(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE))
            .unwrap();

        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::SetColumnFilter(Column::Year, "201".to_string())));
    }

    #[test]
    fn test_ctrl_u_clears_filter() {
        let mut dialog = FilterDialog::default();
        dialog.open(Column::Type, "movie");
        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ClearColumnFilter(Column::Type)));
    }
}
