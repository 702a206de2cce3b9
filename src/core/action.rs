//! # Actions
//!
//! Everything that can happen in Marquee becomes an `Action`.
//! User submits the search box? That's `Action::SetSearchTerm`.
//! The API answers? That's `Action::SetMovies(results)`.
//!
//! The `reduce()` function takes the current state and an action,
//! then returns the new state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  reduce()  →  New State
//! ```
//!
//! This makes everything testable: `assert_eq!(reduce(&state, &action), expected)`.
//! And debuggable: log every action, replay the exact session.

use crate::api::types::Movie;
use crate::core::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A search resolved. Replaces the result set and clears the loading
    /// flag in one update.
    SetMovies(Vec<Movie>),
    SetLoading(bool),
    SetSearchTerm(String),
    /// Handled by the event loop; falls through the reducer untouched.
    Quit,
}

/// Pure reducer: builds the next state from the current one and an action.
///
/// Referentially pure - the input state is never mutated, and identical
/// inputs always produce equal outputs. Actions the reducer does not
/// recognize return the input state unchanged.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    match action {
        Action::SetMovies(movies) => AppState {
            movies: movies.clone(),
            loading: false,
            ..state.clone()
        },
        Action::SetLoading(loading) => AppState {
            loading: *loading,
            ..state.clone()
        },
        Action::SetSearchTerm(term) => AppState {
            search_term: term.clone(),
            ..state.clone()
        },
        _ => state.clone(),
    }
}
