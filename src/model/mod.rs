//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `CatalogState` - rows, pagination and fetch coordination
//! - `Movie` / `SearchResponse` - remote data shapes
//! - `ModalStack` - modal overlay management

pub mod catalog;
pub mod column;
pub mod fetch_state;
pub mod modal;
pub mod movie;
pub mod pagination;
pub mod rows;
pub mod validation;

// Re-export commonly used types
pub use catalog::{CatalogState, SaveOutcome};
pub use column::Column;
pub use fetch_state::FetchState;
pub use movie::{Movie, SearchResponse};
pub use pagination::PaginationCursor;
pub use rows::{Row, RowCollection, RowId};
pub use validation::{CellId, ValidationErrors};
