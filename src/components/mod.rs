//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod create_dialog;
pub mod delete_dialog;
pub mod edit_dialog;
pub mod filter_dialog;
pub mod form;
pub mod grid;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;

pub use create_dialog::CreateDialog;
pub use delete_dialog::DeleteDialog;
pub use edit_dialog::EditDialog;
pub use filter_dialog::FilterDialog;
pub use grid::{draw_grid_screen, GridComponent, GridRenderContext};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
