use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::ViewState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::search_box::SEARCH_BOX_HEIGHT;
use crate::tui::components::{CountryList, DetailBar, TitleBar};

pub fn draw_ui(frame: &mut Frame, state: &ViewState, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(SEARCH_BOX_HEIGHT), Min(0), Length(1)]);
    let [title_area, search_area, list_area, detail_area] = layout.areas(frame.area());

    let visible = state.visible();

    TitleBar::new(
        state.status_message.clone(),
        state.phase.is_fetching(),
        spinner_frame,
    )
    .render(frame, title_area);

    CountryList {
        state: &mut tui.country_list,
        countries: &visible,
        phase: state.phase,
        has_countries: !state.countries.is_empty(),
        query: &state.query,
    }
    .render(frame, list_area);

    let selected = tui
        .country_list
        .selected()
        .and_then(|i| visible.get(i).copied());
    DetailBar { selected }.render(frame, detail_area);

    // Last, so the terminal cursor ends up in the search box.
    tui.search_box.match_count = Some(visible.len());
    tui.search_box.render(frame, search_area);
}
