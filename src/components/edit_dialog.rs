//! Edit movie dialog component
//!
//! Leaving a field validates it; validation messages come from the
//! catalog's error map and are drawn under the offending field.

use crate::action::Action;
use crate::component::Component;
use crate::components::form::MovieForm;
use crate::model::{CellId, Movie, RowId, ValidationErrors};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

/// Prefilled movie form bound to one row
#[derive(Default)]
pub struct EditDialog {
    pub row: Option<RowId>,
    pub form: MovieForm,
}

impl EditDialog {
    /// Load a row into the form
    pub fn open(&mut self, row: RowId, movie: &Movie) {
        self.row = Some(row);
        self.form = MovieForm::for_edit(movie);
    }

    /// Draw with inline messages for this row's invalid cells
    pub fn draw_with_errors(&self, frame: &mut Frame, area: Rect, errors: &ValidationErrors) {
        let row = self.row;
        self.form.render(frame, area, "Edit Movie", |column| {
            row.and_then(|row| errors.get(&CellId { row, column }))
        });
    }
}

impl Component for EditDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let blurred = match key.code {
            KeyCode::Esc => return Ok(Some(Action::CancelEdit)),
            KeyCode::Enter => return Ok(Some(Action::SaveEdit(self.form.movie()))),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace => {
                self.form.backspace();
                None
            }
            KeyCode::Char(c) => {
                self.form.input(c);
                None
            }
            _ => None,
        };

        Ok(blurred
            .filter(|field| field.editable)
            .map(|field| Action::ValidateCell(field.column, field.value)))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_with_errors(frame, area, &ValidationErrors::new());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, RowCollection};
    use crossterm::event::KeyModifiers;

    fn press(dialog: &mut EditDialog, code: KeyCode) -> Option<Action> {
        dialog
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn dialog() -> EditDialog {
        let movie = Movie {
            title: "Man of Steel".to_string(),
            year: "2013".to_string(),
            imdb_id: "tt0770828".to_string(),
            kind: "movie".to_string(),
            poster: "N/A".to_string(),
        };
        let mut rows = RowCollection::new();
        let id = rows.push(movie.clone());

        let mut dialog = EditDialog::default();
        dialog.open(id, &movie);
        dialog
    }

    #[test]
    fn test_leaving_field_requests_validation() {
        let mut dialog = dialog();
        for _ in 0.."Man of Steel".len() {
            press(&mut dialog, KeyCode::Backspace);
        }

        assert_eq!(
            press(&mut dialog, KeyCode::Tab),
            Some(Action::ValidateCell(Column::Title, String::new()))
        );
    }

    #[test]
    fn test_enter_saves_and_esc_cancels() {
        let mut dialog = dialog();
        press(&mut dialog, KeyCode::Char('!'));

        match press(&mut dialog, KeyCode::Enter) {
            Some(Action::SaveEdit(movie)) => assert_eq!(movie.title, "Man of Steel!"),
            other => panic!("unexpected action: {:?}", other),
        }
        assert_eq!(press(&mut dialog, KeyCode::Esc), Some(Action::CancelEdit));
    }
}
