//! # Core Application Logic
//!
//! This module contains Atlas's business logic.
//! It knows nothing about any specific UI technology or the network.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ViewState            │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • filter / collation   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   source   │
//!           │  Adapter   │              │ (reqwest)  │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `ViewState` record and its `Phase`
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`country`]: The normalized `Country` record
//! - [`collation`]: Locale-aware name ordering
//! - [`filter`]: Case-insensitive name search
//! - [`format`]: Compact population strings
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod collation;
pub mod config;
pub mod country;
pub mod filter;
pub mod format;
pub mod state;
