//! # Loading Component
//!
//! Centered placeholder shown while a search is outstanding. It replaces
//! the whole interface; the header and search box come back once the
//! result set lands.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingView {
    frame_index: usize,
}

impl LoadingView {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }
}

impl Component for LoadingView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER_FRAMES[self.frame_index % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled("Loading...", Style::default().add_modifier(Modifier::BOLD)),
        ]);

        let [center] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), center);
    }
}
