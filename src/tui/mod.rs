//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Fetching**: draws every ~80ms so the title bar spinner animates.
//! - **Idle**: sleeps up to 500ms and only redraws on events or resize.
//!
//! ## Fetching
//!
//! `Effect::SpawnFetch` starts a tokio task that calls
//! `CountryListService::fetch_all` and reports back over an mpsc channel as
//! `Action::FetchSucceeded` or `Action::FetchFailed`. Errors never leave that
//! task as anything but an action; the reducer refuses a second fetch while
//! one is in flight.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::collation::Collator;
use crate::core::config::ResolvedConfig;
use crate::core::state::ViewState;
use crate::service::CountryListService;
use crate::source::RestCountriesSource;
use crate::tui::component::EventHandler;
use crate::tui::components::{CountryListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, drain_pending, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub country_list: CountryListState,
    pub search_box: SearchBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            country_list: CountryListState::new(),
            search_box: SearchBox::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Build the service from a resolved config.
pub fn build_service(config: &ResolvedConfig) -> std::io::Result<CountryListService> {
    let source = RestCountriesSource::new(config.base_url.clone(), config.timeout)
        .map_err(std::io::Error::other)?;
    Ok(CountryListService::new(
        Arc::new(source),
        Collator::new(&config.locale),
    ))
}

/// Applies an action and performs the resulting effect. Returns `true` on quit.
fn dispatch(
    state: &mut ViewState,
    action: Action,
    service: &CountryListService,
    tx: &mpsc::Sender<Action>,
) -> bool {
    let (next, effect) = update(std::mem::take(state), action);
    *state = next;
    match effect {
        Effect::None => false,
        Effect::SpawnFetch => {
            spawn_fetch(service.clone(), tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service = build_service(&config)?;
    let mut state = ViewState::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Initial load
    dispatch(&mut state, Action::Refresh, &service, &tx);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        let animating = state.phase.is_fetching();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &state, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        for event in first_event.into_iter().chain(drain_pending()) {
            needs_redraw = true;
            match event {
                TuiEvent::Resize => {}
                TuiEvent::ForceQuit => {
                    should_quit |= dispatch(&mut state, Action::Quit, &service, &tx);
                }
                TuiEvent::Refresh => {
                    should_quit |= dispatch(&mut state, Action::Refresh, &service, &tx);
                }
                TuiEvent::SelectPrev
                | TuiEvent::SelectNext
                | TuiEvent::PageUp
                | TuiEvent::PageDown
                | TuiEvent::SelectFirst
                | TuiEvent::SelectLast => {
                    tui.country_list.handle_event(&event);
                }
                _ => {
                    if let Some(SearchEvent::QueryChanged(query)) = tui.search_box.handle_event(&event) {
                        tui.country_list.reset();
                        should_quit |= dispatch(&mut state, Action::QueryChanged(query), &service, &tx);
                    }
                }
            }
            if should_quit {
                break;
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {}", describe(&action));
            should_quit |= dispatch(&mut state, action, &service, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Short log form; full collections are too large for the debug log.
fn describe(action: &Action) -> String {
    match action {
        Action::FetchSucceeded { countries, .. } => {
            format!("FetchSucceeded({} countries)", countries.len())
        }
        other => format!("{:?}", other),
    }
}

fn spawn_fetch(service: CountryListService, tx: mpsc::Sender<Action>) {
    info!("Spawning country fetch");
    tokio::spawn(async move {
        let action = match service.fetch_all().await {
            Ok(countries) => Action::FetchSucceeded {
                countries,
                fetched_at: chrono::Local::now(),
            },
            Err(e) => {
                warn!("Country fetch failed: {}", e);
                Action::FetchFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}
