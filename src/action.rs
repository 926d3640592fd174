//! Action enum - All possible application actions
//!
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::{Column, Movie};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick; drives fetch polling
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Grid Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextRow,
    PrevRow,
    FirstRow,
    LastRow,
    NextColumn,
    PrevColumn,

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────
    NextPage,
    PrevPage,

    // ─────────────────────────────────────────────────────────────────────────
    // Sorting & Column Layout
    // ─────────────────────────────────────────────────────────────────────────
    /// Cycle sort on the focused column: ascending, descending, none
    CycleSort,
    MoveColumnLeft,
    MoveColumnRight,

    // ─────────────────────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter global filter input
    EnterSearchMode,
    ExitSearchMode,
    SearchInput(char),
    SearchBackspace,
    /// Open the filter dialog for the focused column
    OpenColumnFilter,
    SetColumnFilter(Column, String),
    ClearColumnFilter(Column),

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────
    ToggleRowSelection,
    SelectAllRows,
    ClearSelection,

    // ─────────────────────────────────────────────────────────────────────────
    // Row Actions
    // ─────────────────────────────────────────────────────────────────────────
    /// Copy the focused row's title to the clipboard
    CopyTitle,
    OpenCreateDialog,
    SubmitCreate(Movie),
    OpenEditDialog,
    /// Edit form field lost focus
    ValidateCell(Column, String),
    SaveEdit(Movie),
    CancelEdit,
    OpenDeleteDialog,
    ConfirmDelete,

    // ─────────────────────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────────────────────
    ExportAll,
    ExportSelected,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::FirstRow => write!(f, "FirstRow"),
            Action::LastRow => write!(f, "LastRow"),
            Action::NextColumn => write!(f, "NextColumn"),
            Action::PrevColumn => write!(f, "PrevColumn"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::CycleSort => write!(f, "CycleSort"),
            Action::MoveColumnLeft => write!(f, "MoveColumnLeft"),
            Action::MoveColumnRight => write!(f, "MoveColumnRight"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::OpenColumnFilter => write!(f, "OpenColumnFilter"),
            Action::SetColumnFilter(column, text) => {
                write!(f, "SetColumnFilter({}, {})", column.label(), text)
            }
            Action::ClearColumnFilter(column) => write!(f, "ClearColumnFilter({})", column.label()),
            Action::ToggleRowSelection => write!(f, "ToggleRowSelection"),
            Action::SelectAllRows => write!(f, "SelectAllRows"),
            Action::ClearSelection => write!(f, "ClearSelection"),
            Action::CopyTitle => write!(f, "CopyTitle"),
            Action::OpenCreateDialog => write!(f, "OpenCreateDialog"),
            Action::SubmitCreate(movie) => write!(f, "SubmitCreate({})", movie.imdb_id),
            Action::OpenEditDialog => write!(f, "OpenEditDialog"),
            Action::ValidateCell(column, _) => write!(f, "ValidateCell({})", column.label()),
            Action::SaveEdit(movie) => write!(f, "SaveEdit({})", movie.imdb_id),
            Action::CancelEdit => write!(f, "CancelEdit"),
            Action::OpenDeleteDialog => write!(f, "OpenDeleteDialog"),
            Action::ConfirmDelete => write!(f, "ConfirmDelete"),
            Action::ExportAll => write!(f, "ExportAll"),
            Action::ExportSelected => write!(f, "ExportSelected"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
