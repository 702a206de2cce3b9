//! # SearchBox Component
//!
//! Single-line query input for the header bar.
//!
//! The buffer is internal state. Enter emits the buffer verbatim - no
//! trimming, no validation, empty submissions included. The buffer keeps
//! its content after a submit so the user can refine the query.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// User submitted the query (Enter pressed)
    Submit(String),
}

/// Text input component for the search query.
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor`: Caret position as a byte offset into `buffer`
pub struct SearchBox {
    pub buffer: String,
    cursor: usize,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn insert_str(&mut self, s: &str) {
        self.buffer.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = prev_char_boundary(&self.buffer, self.cursor);
            self.buffer.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert(*c);
                None
            }
            TuiEvent::Paste(data) => {
                self.insert_str(data);
                None
            }
            TuiEvent::Backspace => {
                self.backspace();
                None
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::Submit => Some(SearchEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.buffer.as_str()).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title("Search"),
        );
        frame.render_widget(input, area);

        // Caret column is the display width of everything left of the cursor
        let col = self.buffer[..self.cursor].width() as u16;
        let max_col = area.width.saturating_sub(2);
        frame.set_cursor_position((area.x + 1 + col.min(max_col), area.y + 1));
    }
}

fn prev_char_boundary(s: &str, index: usize) -> usize {
    if index == 0 {
        return 0;
    }
    let mut i = index - 1;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(search_box: &mut SearchBox, text: &str) {
        for c in text.chars() {
            search_box.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_builds_the_buffer() {
        let mut search_box = SearchBox::new();
        type_str(&mut search_box, "matrix");
        assert_eq!(search_box.buffer, "matrix");
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut search_box = SearchBox::new();
        type_str(&mut search_box, "matrix");
        search_box.handle_event(&TuiEvent::Backspace);
        assert_eq!(search_box.buffer, "matri");
    }

    #[test]
    fn test_backspace_on_empty_buffer_is_harmless() {
        let mut search_box = SearchBox::new();
        search_box.handle_event(&TuiEvent::Backspace);
        assert_eq!(search_box.buffer, "");
    }

    #[test]
    fn test_submit_emits_buffer_verbatim() {
        let mut search_box = SearchBox::new();
        type_str(&mut search_box, "  matrix  ");
        let event = search_box.handle_event(&TuiEvent::Submit);
        // Untrimmed, exactly as typed
        assert_eq!(event, Some(SearchEvent::Submit("  matrix  ".to_string())));
        // Buffer survives the submit
        assert_eq!(search_box.buffer, "  matrix  ");
    }

    #[test]
    fn test_submit_of_empty_buffer_is_allowed() {
        let mut search_box = SearchBox::new();
        let event = search_box.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(SearchEvent::Submit(String::new())));
    }

    #[test]
    fn test_cursor_moves_on_char_boundaries() {
        let mut search_box = SearchBox::new();
        type_str(&mut search_box, "héllo");
        // Move left over 'o', 'l', 'l', 'é' and insert in the middle
        for _ in 0..4 {
            search_box.handle_event(&TuiEvent::CursorLeft);
        }
        search_box.handle_event(&TuiEvent::InputChar('X'));
        assert_eq!(search_box.buffer, "hXéllo");
    }

    #[test]
    fn test_paste_inserts_at_cursor() {
        let mut search_box = SearchBox::new();
        type_str(&mut search_box, "man");
        search_box.handle_event(&TuiEvent::CursorLeft);
        search_box.handle_event(&TuiEvent::CursorLeft);
        search_box.handle_event(&TuiEvent::CursorLeft);
        search_box.handle_event(&TuiEvent::Paste("bat".to_string()));
        assert_eq!(search_box.buffer, "batman");
    }
}
