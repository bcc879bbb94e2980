//! # SearchBox Component
//!
//! Single-line query input above the country list.
//!
//! ## Responsibilities
//!
//! - Capture text input, paste, backspace/delete and left/right movement
//! - Clear the query (Esc / Ctrl+U)
//! - Report every change so the list re-filters on each keystroke
//!
//! The buffer is internal state; the parent mirrors it into
//! `ViewState::query` through `Action::QueryChanged`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows taken by the search box including its border.
pub const SEARCH_BOX_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    QueryChanged(String),
}

pub struct SearchBox {
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// Number of matches shown in the title (prop)
    pub match_count: Option<usize>,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            match_count: None,
        }
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::QueryChanged(self.buffer.clone()))
    }

    fn insert(&mut self, text: &str) -> Option<SearchEvent> {
        if text.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
        self.changed()
    }

    /// Display columns before the cursor, saturating at `u16::MAX`.
    fn cursor_column(&self) -> u16 {
        u16::try_from(self.buffer[..self.cursor].width()).unwrap_or(u16::MAX)
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.match_count {
            Some(n) if !self.buffer.is_empty() => format!("Search ({n} matches)"),
            _ => "Search".to_string(),
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(title);

        // Scroll horizontally so the cursor is always inside the box.
        let inner_width = area.width.saturating_sub(2);
        let column = self.cursor_column();
        let offset = column.saturating_add(1).saturating_sub(inner_width);

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .scroll((0, offset))
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        if area.width > 2 && area.height > 2 {
            let x = (column - offset).min(inner_width - 1);
            frame.set_cursor_position((area.x.saturating_add(1).saturating_add(x), area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert(c.encode_utf8(&mut tmp))
            }
            TuiEvent::Paste(text) => {
                let single_line: String = text.chars().filter(|c| !c.is_control()).collect();
                self.insert(&single_line)
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::ClearQuery => {
                if self.buffer.is_empty() {
                    return None;
                }
                self.buffer.clear();
                self.cursor = 0;
                self.changed()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> SearchBox {
        let mut search = SearchBox::new();
        for c in text.chars() {
            search.handle_event(&TuiEvent::InputChar(c));
        }
        search
    }

    #[test]
    fn test_every_keystroke_reports_query() {
        let mut search = SearchBox::new();
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('f')),
            Some(SearchEvent::QueryChanged("f".to_string()))
        );
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('i')),
            Some(SearchEvent::QueryChanged("fi".to_string()))
        );
        assert_eq!(
            search.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::QueryChanged("f".to_string()))
        );
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut search = typed("Åland");
        search.handle_event(&TuiEvent::CursorLeft);
        search.handle_event(&TuiEvent::CursorLeft);
        search.handle_event(&TuiEvent::CursorLeft);
        search.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(
            search.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::QueryChanged("land".to_string()))
        );
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('Ö')),
            Some(SearchEvent::QueryChanged("Öland".to_string()))
        );
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut search = typed("peru");
        search.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(
            search.handle_event(&TuiEvent::Delete),
            Some(SearchEvent::QueryChanged("per".to_string()))
        );
        assert_eq!(search.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut search = SearchBox::new();
        assert_eq!(
            search.handle_event(&TuiEvent::Paste("new\nzealand\r\n".to_string())),
            Some(SearchEvent::QueryChanged("newzealand".to_string()))
        );
    }

    #[test]
    fn test_clear_query() {
        let mut search = typed("chad");
        assert_eq!(
            search.handle_event(&TuiEvent::ClearQuery),
            Some(SearchEvent::QueryChanged(String::new()))
        );
        assert_eq!(search.handle_event(&TuiEvent::ClearQuery), None);
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('x')),
            Some(SearchEvent::QueryChanged("x".to_string()))
        );
    }

    #[test]
    fn test_render_shows_query_and_match_count() {
        let backend = TestBackend::new(40, SEARCH_BOX_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut search = typed("guin");
        search.match_count = Some(3);

        terminal.draw(|f| search.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Search (3 matches)"));
        assert!(text.contains("guin"));
    }

    #[test]
    fn test_render_scrolls_long_query() {
        let backend = TestBackend::new(12, SEARCH_BOX_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut search = typed("democratic republic");
        terminal.draw(|f| search.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("republic"));
    }

    #[test]
    fn test_cursor_column_saturates_for_huge_queries() {
        let mut search = SearchBox::new();
        search.buffer = "a".repeat(70_000);
        search.cursor = search.buffer.len();
        assert_eq!(search.cursor_column(), u16::MAX);
    }

    #[test]
    fn test_render_query_at_column_limit() {
        for len in [65_535, 70_000] {
            let backend = TestBackend::new(20, SEARCH_BOX_HEIGHT);
            let mut terminal = Terminal::new(backend).unwrap();

            let mut search = SearchBox::new();
            search.buffer = "a".repeat(len);
            search.cursor = search.buffer.len();
            terminal.draw(|f| search.render(f, f.area())).unwrap();

            let cursor = terminal.get_cursor_position().unwrap();
            assert!(cursor.x < 19);
        }
    }
}
