//! # DetailBar Component
//!
//! Bottom line summarizing the highlighted country, including the flag URL
//! (the terminal cannot draw the image itself) and the key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::country::Country;
use crate::tui::component::Component;

pub const KEY_HINTS: &str = "type to search · Esc clear · Ctrl+R refresh · Ctrl+C quit";

pub struct DetailBar<'a> {
    pub selected: Option<&'a Country>,
}

impl DetailBar<'_> {
    fn text(&self) -> String {
        match self.selected {
            Some(c) => format!(
                "{} · {} · {} · {} people · {}",
                c.country_code,
                c.capital_display(),
                if c.region.is_empty() { "-" } else { c.region.as_str() },
                c.population,
                c.flag_image_url
            ),
            None => KEY_HINTS.to_string(),
        }
    }
}

impl Component for DetailBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().fg(Color::DarkGray));
        frame.render_widget(Line::from(span), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::country;

    #[test]
    fn test_detail_for_selected_country() {
        let mut peru = country("Peru", "PER");
        peru.capital_names = vec!["Lima".to_string()];
        peru.region = "Americas".to_string();
        peru.population = 32_971_846;
        peru.flag_image_url = "https://flagcdn.com/w320/pe.png".to_string();
        let bar = DetailBar {
            selected: Some(&peru),
        };
        assert_eq!(
            bar.text(),
            "PER · Lima · Americas · 32971846 people · https://flagcdn.com/w320/pe.png"
        );
    }

    #[test]
    fn test_hints_when_nothing_selected() {
        let bar = DetailBar { selected: None };
        assert_eq!(bar.text(), KEY_HINTS);
    }
}
