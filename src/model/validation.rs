//! Per-cell validation errors

use super::column::Column;
use super::rows::RowId;
use std::collections::BTreeMap;
use std::fmt;

/// Identifies one cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId {
    pub row: RowId,
    pub column: Column,
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.row, self.column.label())
    }
}

/// Required-field check used by every editable cell
pub fn validate_required(value: &str) -> bool {
    !value.is_empty()
}

/// Pending validation messages keyed by cell
#[derive(Debug, Default, Clone)]
pub struct ValidationErrors {
    errors: BTreeMap<CellId, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-validate a cell after it loses focus
    ///
    /// Sets "<label> is required" when empty, clears the entry otherwise.
    /// Returns true if the cell is valid.
    pub fn validate_cell(&mut self, cell: CellId, value: &str) -> bool {
        if validate_required(value) {
            self.errors.remove(&cell);
            true
        } else {
            self.errors
                .insert(cell, format!("{} is required", cell.column.label()));
            false
        }
    }

    pub fn get(&self, cell: &CellId) -> Option<&str> {
        self.errors.get(cell).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}
