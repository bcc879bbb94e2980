//! Name search over the in-memory collection.

use crate::core::country::Country;

/// Returns the countries whose `common_name` contains `query` as a
/// case-insensitive substring, in their original order.
///
/// An empty query matches everything.
pub fn filter<'a>(countries: &'a [Country], query: &str) -> Vec<&'a Country> {
    if query.is_empty() {
        return countries.iter().collect();
    }

    let needle = query.to_lowercase();
    countries
        .iter()
        .filter(|c| c.common_name.to_lowercase().contains(&needle))
        .collect()
}
