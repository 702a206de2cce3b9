//! # Application State
//!
//! Core view state for Marquee. This module contains domain data only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! AppState
//! ├── movies: Vec<Movie>      // current result set, server order
//! ├── loading: bool           // a search is outstanding
//! └── search_term: String     // the active query
//! ```
//!
//! State changes only happen through `reduce(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::api::types::Movie;

/// Search term used for the very first fetch after startup.
pub const DEFAULT_SEARCH_TERM: &str = "batman";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Result set of the last successful search, in server order.
    pub movies: Vec<Movie>,
    /// True from the moment a search is issued until its response is
    /// reduced into state.
    pub loading: bool,
    /// The query the current (or pending) result set belongs to.
    pub search_term: String,
}

impl AppState {
    /// A fresh session: no results yet, loading the given term.
    pub fn new(search_term: String) -> Self {
        Self {
            movies: Vec::new(),
            loading: true,
            search_term,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_TERM.to_string())
    }
}
