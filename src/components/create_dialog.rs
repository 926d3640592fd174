//! Create movie dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::form::MovieForm;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

/// Blank movie form; submitting hands the record to the catalog
#[derive(Default)]
pub struct CreateDialog {
    pub form: MovieForm,
}

impl CreateDialog {
    /// Reset dialog state for a new invocation
    pub fn reset(&mut self) {
        self.form = MovieForm::for_create();
    }
}

impl Component for CreateDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SubmitCreate(self.form.movie())),
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                None
            }
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
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.form
            .render(frame, area, "Create New Movie", |_| None::<&str>);
        Ok(())
    }
}
