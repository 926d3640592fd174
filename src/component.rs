//! Component trait - interface for grid, dialogs and overlays
//!
//! A component turns input events into Actions, applies Actions to its own
//! state, and renders itself. Shared data (rows, validation errors) lives in
//! `CatalogState` and is handed to components at draw time.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` / `handle_mouse_event` map input to an Action
/// 2. `update` applies an Action, optionally chaining another
/// 3. `draw` renders into the given area
pub trait Component {
    /// Called once before the first frame
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Map a key press to an Action
    ///
    /// Text-entry components may edit their own buffer here; everything
    /// that touches shared state goes through the returned Action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Apply an Action to local state
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render the component; no state changes beyond scroll clamping
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
