//! Fetch lifecycle state
//!
//! One explicit variant instead of independent loading/refetching/error
//! booleans, so a failed request can never leave a progress flag behind.

/// State of the page fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// First load, no rows to show yet
    Loading,
    /// Page navigation while the previous rows stay visible
    Refetching,
    /// Last request succeeded
    Succeeded,
    /// Last request failed; rows keep their previous value
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_refetching(&self) -> bool {
        matches!(self, FetchState::Refetching)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }

    pub fn is_in_flight(&self) -> bool {
        self.is_loading() || self.is_refetching()
    }

    /// State to enter when a new request starts
    pub fn begin(has_rows: bool) -> Self {
        if has_rows {
            FetchState::Refetching
        } else {
            FetchState::Loading
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_depends_on_existing_rows() {
        assert_eq!(FetchState::begin(false), FetchState::Loading);
        assert_eq!(FetchState::begin(true), FetchState::Refetching);
    }

    #[test]
    fn test_flags_are_mutually_exclusive() {
        let failed = FetchState::Failed("boom".to_string());
        assert!(failed.is_error());
        assert!(!failed.is_loading());
        assert!(!failed.is_refetching());
        assert_eq!(failed.error_message(), Some("boom"));

        assert!(FetchState::Refetching.is_in_flight());
        assert!(!FetchState::Succeeded.is_in_flight());
    }
}
