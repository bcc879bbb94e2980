//! # CountryList Component
//!
//! Scrollable table of the visible (filtered, sorted) countries.
//!
//! `CountryList` is transient (built each frame) and wraps
//! `&'a mut CountryListState`, which persists selection and scroll offset
//! in the parent `TuiState`. When there is nothing to show, it renders an
//! empty-state message chosen from the current `Phase` and query.
//!
//! Row indices are not stable across refreshes, so the state also remembers
//! the `country_code` drawn as selected in the last frame. If the user has
//! not moved the highlight since, the next frame selects that country again
//! wherever it now sits, or the first row if it is gone.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};

use crate::core::country::Country;
use crate::core::format::format_population;
use crate::core::state::Phase;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Selection and scroll state for the country table.
/// Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct CountryListState {
    pub table_state: TableState,
    /// Body rows visible in the last frame (for PageUp/PageDown)
    pub viewport_height: u16,
    /// Row index and country code selected in the last frame
    anchor: Option<(usize, String)>,
}

impl CountryListState {
    pub fn new() -> Self {
        Self {
            table_state: TableState::default().with_selected(Some(0)),
            viewport_height: 0,
            anchor: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Jump back to the top, e.g. after the query changes.
    pub fn reset(&mut self) {
        self.table_state = TableState::default().with_selected(Some(0));
        self.anchor = None;
    }

    /// Code of the country selected in the last frame.
    pub fn selected_code(&self) -> Option<&str> {
        self.anchor.as_ref().map(|(_, code)| code.as_str())
    }

    /// Moves the selection onto the anchored country in `countries`, unless
    /// the user navigated since the last frame. Clamps to the last row.
    pub fn sync(&mut self, countries: &[&Country]) {
        if countries.is_empty() {
            return;
        }
        if let Some((index, code)) = &self.anchor {
            if self.table_state.selected() == Some(*index) {
                let position = countries
                    .iter()
                    .position(|c| &c.country_code == code)
                    .unwrap_or(0);
                self.table_state.select(Some(position));
            }
        }
        let last = countries.len() - 1;
        match self.table_state.selected() {
            Some(i) if i > last => self.table_state.select(Some(last)),
            None => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    fn remember(&mut self, countries: &[&Country]) {
        self.anchor = self
            .table_state
            .selected()
            .and_then(|i| countries.get(i).map(|c| (i, c.country_code.clone())));
    }

    fn page(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }
}

impl EventHandler for CountryListState {
    type Event = (); // Selection is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::SelectPrev => self.table_state.select_previous(),
            TuiEvent::SelectNext => self.table_state.select_next(),
            TuiEvent::PageUp => self.table_state.scroll_up_by(self.page()),
            TuiEvent::PageDown => self.table_state.scroll_down_by(self.page()),
            TuiEvent::SelectFirst => self.table_state.select_first(),
            TuiEvent::SelectLast => self.table_state.select_last(),
            _ => return None,
        }
        Some(())
    }
}

/// Message shown instead of the table when no rows are visible.
pub fn empty_message(phase: Phase, has_countries: bool, query: &str) -> String {
    match phase {
        Phase::Loading => "Loading countries...".to_string(),
        _ if has_countries && !query.is_empty() => format!("No countries match \"{query}\""),
        Phase::Refreshing => "Refreshing...".to_string(),
        _ => "No countries to show. Press Ctrl+R to refresh.".to_string(),
    }
}

pub struct CountryList<'a> {
    pub state: &'a mut CountryListState,
    pub countries: &'a [&'a Country],
    pub phase: Phase,
    pub has_countries: bool,
    pub query: &'a str,
}

impl CountryList<'_> {
    fn row(country: &Country) -> Row<'static> {
        Row::new(vec![
            Cell::from(country.common_name.clone())
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(country.capital_display()),
            Cell::from(country.region.clone()),
            Cell::from(Line::from(format_population(country.population)).alignment(Alignment::Right)),
        ])
    }
}

impl Component for CountryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("Countries");

        if self.countries.is_empty() {
            let message = empty_message(self.phase, self.has_countries, self.query);
            let paragraph = Paragraph::new(message)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(paragraph, area);
            return;
        }

        // Border (2) + header (1)
        self.state.viewport_height = area.height.saturating_sub(3);
        self.state.sync(self.countries);

        let header = Row::new(vec!["Name", "Capital", "Region", "Population"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        let widths = [
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Length(10),
            Constraint::Length(10),
        ];
        let table = Table::new(self.countries.iter().map(|c| Self::row(c)), widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
        self.state.remember(self.countries);
    }
}
