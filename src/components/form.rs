//! Movie form shared by the create and edit dialogs
//!
//! One text field per column. Read-only fields are shown but never take focus.

use crate::model::{Column, Movie};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A single labelled form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub column: Column,
    pub value: String,
    pub editable: bool,
}

/// Field values plus the focus cursor
#[derive(Debug, Clone)]
pub struct MovieForm {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl Default for MovieForm {
    fn default() -> Self {
        Self::for_create()
    }
}

impl MovieForm {
    /// Blank form where every column is editable
    pub fn for_create() -> Self {
        let fields = Column::ALL
            .iter()
            .map(|column| FormField {
                column: *column,
                value: String::new(),
                editable: true,
            })
            .collect();
        Self { fields, focused: 0 }
    }

    /// Form prefilled from an existing movie; the identity column is locked
    pub fn for_edit(movie: &Movie) -> Self {
        let fields: Vec<FormField> = Column::ALL
            .iter()
            .map(|column| FormField {
                column: *column,
                value: column.value(movie).to_string(),
                editable: column.is_editable(),
            })
            .collect();
        let focused = fields.iter().position(|f| f.editable).unwrap_or(0);
        Self { fields, focused }
    }

    /// Build a movie from the current field values
    pub fn movie(&self) -> Movie {
        let mut movie = Movie::default();
        for field in &self.fields {
            field.column.set_value(&mut movie, field.value.clone());
        }
        movie
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    fn step_focus(&mut self, forward: bool) -> Option<FormField> {
        let len = self.fields.len();
        if len == 0 {
            return None;
        }
        let left = self.fields.get(self.focused).cloned();

        let mut next = self.focused;
        for _ in 0..len {
            next = if forward {
                (next + 1) % len
            } else {
                (next + len - 1) % len
            };
            if self.fields[next].editable {
                break;
            }
        }
        self.focused = next;
        left
    }

    /// Move focus to the next editable field, returning the one that lost focus
    pub fn focus_next(&mut self) -> Option<FormField> {
        self.step_focus(true)
    }

    /// Move focus to the previous editable field, returning the one that lost focus
    pub fn focus_prev(&mut self) -> Option<FormField> {
        self.step_focus(false)
    }

    pub fn input(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            if field.editable {
                field.value.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            if field.editable {
                field.value.pop();
            }
        }
    }

    /// Render the form as a centered popup
    ///
    /// `error_for` supplies the inline message shown under a field.
    pub fn render<'a, F>(&self, frame: &mut Frame, area: Rect, title: &str, error_for: F)
    where
        F: Fn(Column) -> Option<&'a str>,
    {
        let width = 64u16.min(area.width.saturating_sub(4));
        let error_lines = self
            .fields
            .iter()
            .filter(|f| error_for(f.column).is_some())
            .count() as u16;
        let height = (self.fields.len() as u16 * 2 + error_lines + 5).min(area.height);
        let popup_area = crate::components::centered_popup(area, width, height);

        frame.render_widget(Clear, popup_area);

        let mut lines = vec![Line::from("")];
        for (i, field) in self.fields.iter().enumerate() {
            let is_focused = i == self.focused;
            let label_style = if is_focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            let value_style = if !field.editable {
                Style::default().fg(Color::DarkGray)
            } else if is_focused {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            let cursor = if is_focused && field.editable { "_" } else { "" };

            lines.push(Line::from(vec![
                Span::styled(format!("  {:8} ", field.column.label()), label_style),
                Span::styled(format!("{}{}", field.value, cursor), value_style),
                if field.editable {
                    Span::raw("")
                } else {
                    Span::styled("  (read-only)", Style::default().fg(Color::DarkGray))
                },
            ]));
            if let Some(message) = error_for(field.column) {
                lines.push(Line::from(Span::styled(
                    format!("           {}", message),
                    Style::default().fg(Color::Red),
                )));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled(
                " Tab ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Next field  "),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Save  "),
            Span::styled(
                " Esc ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel"),
        ]));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(format!(" {} ", title))
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Movie {
        Movie {
            title: "Man of Steel".to_string(),
            year: "2013".to_string(),
            imdb_id: "tt0770828".to_string(),
            kind: "movie".to_string(),
            poster: "N/A".to_string(),
        }
    }

    #[test]
    fn test_edit_form_skips_identity_field() {
        let mut form = MovieForm::for_edit(&sample());
        assert_eq!(form.focused_field().map(|f| f.column), Some(Column::Title));

        form.focus_next();
        let left = form.focus_next();

        assert_eq!(left.map(|f| f.column), Some(Column::Year));
        assert_eq!(form.focused_field().map(|f| f.column), Some(Column::Type));
    }

    #[test]
    fn test_focus_wraps_backwards() {
        let mut form = MovieForm::for_create();
        form.focus_prev();
        assert_eq!(form.focused_field().map(|f| f.column), Some(Column::Poster));
    }

    #[test]
    fn test_typing_builds_movie() {
        let mut form = MovieForm::for_edit(&sample());
        for _ in 0.."Man of Steel".len() {
            form.backspace();
        }
        for c in "Superman".chars() {
            form.input(c);
        }

        let movie = form.movie();
        assert_eq!(movie.title, "Superman");
        assert_eq!(movie.imdb_id, "tt0770828");
    }
}
