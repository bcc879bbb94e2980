//! # Country
//!
//! The normalized, display-ready record. Providers map their own wire
//! shapes into this type; nothing above the `source` layer ever sees raw JSON.

/// A single country as shown in the list.
///
/// `country_code` (ISO 3166-1 alpha-3) is the stable identity within one
/// fetched collection. `common_name` is not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub common_name: String,
    pub capital_names: Vec<String>,
    pub population: u64,
    pub region: String,
    pub flag_image_url: String,
    pub country_code: String,
}

impl Country {
    /// Capitals joined for display, or `"-"` when the country has none.
    pub fn capital_display(&self) -> String {
        if self.capital_names.is_empty() {
            "-".to_string()
        } else {
            self.capital_names.join(", ")
        }
    }
}
