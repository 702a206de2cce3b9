//! # TitleBar Component
//!
//! Header line showing the application title and, when a result set is
//! present, how many movies it holds and for which query.
//!
//! Purely presentational - it receives all data as props and has no
//! internal state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

/// Header bar component.
///
/// # Props
///
/// - `search_term`: The query the current result set belongs to
/// - `result_count`: Number of movies in the current result set
pub struct TitleBar {
    pub search_term: String,
    pub result_count: usize,
}

impl TitleBar {
    pub fn new(search_term: String, result_count: usize) -> Self {
        Self {
            search_term,
            result_count,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.result_count > 0 {
            format!(
                "Marquee Movie Finder | {} results for \"{}\"",
                self.result_count, self.search_term
            )
        } else {
            "Marquee Movie Finder".to_string()
        };

        frame.render_widget(
            Span::styled(title_text, Style::default().add_modifier(Modifier::BOLD)),
            area,
        );
    }
}
