//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as struct fields:
//! - `TitleBar`: Header line with the application title and result summary
//! - `MovieCard`: One result card (title, year, poster URL)
//! - `LoadingView`: Centered placeholder shown while a search is outstanding
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and consume events:
//! - `SearchBox`: Single-line query input, emits `SearchEvent::Submit`
//! - `MovieGridState`: Scroll position of the result grid
//!
//! Each component file contains everything related to that component:
//! state types, event types, rendering logic, and tests.

mod loading;
mod movie_card;
mod movie_grid;
mod search_box;
mod title_bar;

pub use loading::LoadingView;
pub use movie_card::{CARD_HEIGHT, MovieCard};
pub use movie_grid::{MovieGrid, MovieGridState, column_count};
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;
