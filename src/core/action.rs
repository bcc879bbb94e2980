//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User presses Ctrl+R? That's `Action::Refresh`.
//! The fetch task finishes? That's `Action::FetchSucceeded { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the new state plus an `Effect` for the caller to perform.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! ViewState + Action  →  update()  →  (ViewState, Effect)
//! ```
//!
//! This makes everything testable: `assert_eq!(update(state, action), expected)`.

use chrono::{DateTime, Local};
use log::debug;

use crate::core::country::Country;
use crate::core::state::{Phase, ViewState};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Initial load or user-triggered refresh.
    Refresh,
    FetchSucceeded {
        countries: Vec<Country>,
        fetched_at: DateTime<Local>,
    },
    /// The reason is for the log only; it is never shown on screen.
    FetchFailed(String),
    QueryChanged(String),
    Quit,
}

/// Work the event loop must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch,
    Quit,
}

pub fn update(state: ViewState, action: Action) -> (ViewState, Effect) {
    match action {
        Action::Refresh => {
            if state.phase.is_fetching() {
                debug!("Refresh ignored: fetch already in flight ({:?})", state.phase);
                return (state, Effect::None);
            }
            let (phase, status_message) = if state.countries.is_empty() {
                (Phase::Loading, "Loading countries...")
            } else {
                (Phase::Refreshing, "Refreshing...")
            };
            (
                ViewState {
                    phase,
                    status_message: status_message.to_string(),
                    ..state
                },
                Effect::SpawnFetch,
            )
        }
        Action::FetchSucceeded {
            countries,
            fetched_at,
        } => {
            let phase = Phase::settled(!countries.is_empty());
            let status_message = format!(
                "{} countries | updated {}",
                countries.len(),
                fetched_at.format("%H:%M:%S")
            );
            (
                ViewState {
                    countries,
                    phase,
                    status_message,
                    fetched_at: Some(fetched_at),
                    ..state
                },
                Effect::None,
            )
        }
        Action::FetchFailed(reason) => {
            debug!("Fetch failed, keeping {} countries: {}", state.countries.len(), reason);
            let phase = Phase::settled(!state.countries.is_empty());
            (
                ViewState {
                    phase,
                    status_message: "Couldn't load countries. Press Ctrl+R to retry.".to_string(),
                    ..state
                },
                Effect::None,
            )
        }
        Action::QueryChanged(query) => (ViewState { query, ..state }, Effect::None),
        Action::Quit => (state, Effect::Quit),
    }
}
