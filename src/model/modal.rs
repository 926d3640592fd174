//! Modal stack for managing overlays
//!
//! Dialog visibility is a stack of `Modal` values rather than one boolean
//! per dialog.

use super::column::Column;
use super::rows::RowId;

/// Represents a modal overlay that can be displayed on top of the grid
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Create-new-movie form
    CreateMovie,
    /// Edit form for one row
    EditMovie { row: RowId },
    /// Delete confirmation for the pending deletion target
    DeleteConfirm,
    /// Per-column filter input
    ColumnFilter { column: Column },
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Only the top modal is drawn and receives input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether a modal of the same kind is already open anywhere in the stack
    pub fn contains(&self, modal: &Modal) -> bool {
        self.stack.iter().any(|m| m == modal)
    }
}
