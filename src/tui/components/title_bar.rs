//! # TitleBar Component
//!
//! One-line status bar at the top of the screen.
//!
//! Stateless: every field is a prop copied from `ViewState` each frame.
//!
//! 1. **Fetching**: `"Atlas | ⠹ Refreshing..."`
//! 2. **Status message**: `"Atlas | 250 countries | updated 12:00:00"`
//! 3. **Default**: `"Atlas"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub status_message: String,
    pub is_fetching: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(status_message: String, is_fetching: bool, spinner_frame: usize) -> Self {
        Self {
            status_message,
            is_fetching,
            spinner_frame,
        }
    }

    fn text(&self) -> String {
        if self.is_fetching {
            let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
            format!("Atlas | {} {}", spinner, self.status_message)
        } else if self.status_message.is_empty() {
            "Atlas".to_string()
        } else {
            format!("Atlas | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.is_fetching {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        frame.render_widget(Line::from(Span::styled(self.text(), style)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("250 countries | updated 12:00:00".to_string(), false, 0);
        let text = rendered(&mut title_bar);
        assert!(text.contains("Atlas | 250 countries"));
        assert!(!SPINNER.iter().any(|s| text.contains(s)));
    }

    #[test]
    fn test_title_bar_spinner_while_fetching() {
        let mut title_bar = TitleBar::new("Refreshing...".to_string(), true, 2);
        let text = rendered(&mut title_bar);
        assert!(text.contains("Atlas | ⠹ Refreshing..."));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(String::new(), false, 0);
        let text = rendered(&mut title_bar);
        assert!(text.starts_with("Atlas"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_spinner_wraps() {
        let title_bar = TitleBar::new("Loading".to_string(), true, SPINNER.len() + 1);
        assert_eq!(title_bar.text(), "Atlas | ⠙ Loading");
    }
}
