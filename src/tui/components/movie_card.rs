//! # MovieCard Component
//!
//! One result card: title, year, poster URL. The poster URL line stands in
//! for the image a graphical client would show; an "N/A" poster renders
//! the literal string with no fallback.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::api::types::Movie;

/// Rows one card occupies in the grid, borders included.
pub const CARD_HEIGHT: u16 = 6;

/// Title lines shown before clipping.
const TITLE_LINES: usize = 2;

pub struct MovieCard<'a> {
    pub movie: &'a Movie,
}

impl<'a> MovieCard<'a> {
    pub fn new(movie: &'a Movie) -> Self {
        Self { movie }
    }

    /// Builds the card sized for a grid cell `width` columns wide
    /// (borders included).
    pub fn paragraph(&self, width: u16) -> Paragraph<'static> {
        let inner_width = width.saturating_sub(2).max(1) as usize;

        let mut lines: Vec<Line> = textwrap::wrap(&self.movie.title, inner_width)
            .into_iter()
            .take(TITLE_LINES)
            .map(|part| {
                Line::from(Span::styled(
                    part.into_owned(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        while lines.len() < TITLE_LINES {
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            self.movie.year.clone(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            self.movie.poster.clone(),
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).block(Block::bordered().border_type(BorderType::Rounded))
    }
}
