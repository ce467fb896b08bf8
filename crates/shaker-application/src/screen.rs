//! Shared per-screen state.

/// The state a screen renders from.
///
/// Every screen independently fetches and settles into one of these; no
/// failure is fatal, a screen degrades to `Empty` or `Error` and stays
/// interactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState<T> {
    /// A fetch is in flight. `load()` resolves before returning, so this is
    /// never handed back here; it is the initial state for render loops that
    /// draw while a load is pending.
    Loading,
    /// Data arrived and is non-empty
    Loaded(T),
    /// The fetch settled with nothing to show (no results, not an error)
    Empty,
    /// Inline message to surface (validation or generic failure)
    Error(String),
}

impl<T> ScreenState<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the loaded value, if any.
    pub fn loaded(self) -> Option<T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_is_a_distinct_initial_state() {
        let state: ScreenState<Vec<String>> = ScreenState::Loading;

        assert!(!state.is_loaded());
        assert!(!state.is_empty());
        assert_eq!(state.loaded(), None);
    }

    #[test]
    fn test_loaded_unwraps_value() {
        let state = ScreenState::Loaded(vec!["11007".to_string()]);

        assert!(state.is_loaded());
        assert_eq!(state.loaded(), Some(vec!["11007".to_string()]));
    }
}
