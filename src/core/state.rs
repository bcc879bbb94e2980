//! # View State
//!
//! Everything the screen needs, in one immutable record. This module
//! contains domain state only; scroll offsets and the text cursor live in
//! the `tui` module.
//!
//! ```text
//! ViewState
//! ├── countries: Vec<Country>          // collection from the last good fetch
//! ├── query: String                    // search box contents
//! ├── phase: Phase                     // loading / loaded / refreshing / empty
//! ├── status_message: String           // title bar text
//! └── fetched_at: Option<DateTime>     // when the collection was replaced
//! ```
//!
//! A new `ViewState` is only ever produced by `update(state, action)` in
//! action.rs.

use chrono::{DateTime, Local};

use crate::core::country::Country;
use crate::core::filter::filter;

/// Where the screen is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// First fetch in flight, nothing to show yet.
    Loading,
    /// A collection is on screen and no fetch is running.
    Loaded,
    /// A fetch is in flight while the previous collection stays on screen.
    Refreshing,
    /// No fetch running and nothing to show.
    #[default]
    Empty,
}

impl Phase {
    pub fn is_fetching(self) -> bool {
        matches!(self, Phase::Loading | Phase::Refreshing)
    }

    /// Phase to settle into once a fetch completes.
    pub fn settled(has_countries: bool) -> Self {
        if has_countries {
            Phase::Loaded
        } else {
            Phase::Empty
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub countries: Vec<Country>,
    pub query: String,
    pub phase: Phase,
    pub status_message: String,
    pub fetched_at: Option<DateTime<Local>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            status_message: String::from("Welcome to Atlas!"),
            ..Default::default()
        }
    }

    /// The collection narrowed by the current query.
    pub fn visible(&self) -> Vec<&Country> {
        filter(&self.countries, &self.query)
    }
}
