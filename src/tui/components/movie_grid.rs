//! # MovieGrid Component
//!
//! Scrollable, responsive grid of movie cards. Cards are laid out
//! row-major in server order; the column count follows the terminal
//! width so narrow panes degrade to a single column.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use super::movie_card::{CARD_HEIGHT, MovieCard};
use crate::api::types::Movie;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Number of card columns at a given terminal width.
pub fn column_count(width: u16) -> u16 {
    match width {
        w if w >= 140 => 4,
        w if w >= 105 => 3,
        w if w >= 70 => 2,
        _ => 1,
    }
}

/// Scroll position of the result grid, persistent across frames.
#[derive(Default)]
pub struct MovieGridState {
    pub scroll_state: ScrollViewState,
}

impl MovieGridState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for MovieGridState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

/// The result grid. Receives the movies as props; scroll state lives in
/// `MovieGridState`.
pub struct MovieGrid<'a> {
    pub movies: &'a [Movie],
}

impl<'a> MovieGrid<'a> {
    pub fn new(movies: &'a [Movie]) -> Self {
        Self { movies }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &mut MovieGridState) {
        let content_width = area.width.saturating_sub(1); // room for the scrollbar
        let columns = column_count(area.width).max(1);
        let card_width = (content_width / columns).max(1);
        let rows = (self.movies.len() as u16).div_ceil(columns);
        let total_height = rows * CARD_HEIGHT;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, movie) in self.movies.iter().enumerate() {
            let index = index as u16;
            let col = index % columns;
            let row = index / columns;
            let card_rect = Rect::new(col * card_width, row * CARD_HEIGHT, card_width, CARD_HEIGHT);
            scroll_view.render_widget(MovieCard::new(movie).paragraph(card_width), card_rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut state.scroll_state);
    }
}
