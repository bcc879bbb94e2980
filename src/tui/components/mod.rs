//! # TUI Components
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar, stateless)
//! ├── search_box.rs    (Query input, stateful)
//! ├── country_list.rs  (Country table + empty state, stateful)
//! └── detail_bar.rs    (Selected country summary, stateless)
//! ```
//!
//! Stateless components receive everything as props. Stateful ones keep
//! their state in `TuiState` and emit events through `EventHandler`.

pub mod country_list;
pub mod detail_bar;
pub mod search_box;
mod title_bar;

pub use country_list::{CountryList, CountryListState};
pub use detail_bar::DetailBar;
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;
