//! # Country List Service
//!
//! Glue between a [`CountrySource`] and the screen: fetch, then sort with
//! the configured [`Collator`]. Filtering and population formatting are
//! pure functions over the result and are re-exported here so callers have
//! one place to look.

use std::collections::HashSet;
use std::sync::Arc;

use log::{info, warn};

use crate::core::collation::Collator;
use crate::core::country::Country;
use crate::source::{CountrySource, FetchError};

pub use crate::core::filter::filter;
pub use crate::core::format::format_population;

#[derive(Clone)]
pub struct CountryListService {
    source: Arc<dyn CountrySource>,
    collator: Collator,
}

impl CountryListService {
    pub fn new(source: Arc<dyn CountrySource>, collator: Collator) -> Self {
        Self { source, collator }
    }

    pub fn collator(&self) -> &Collator {
        &self.collator
    }

    /// Fetches every country the source returns, sorted by `common_name`
    /// under the service's collator.
    pub async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        let mut countries = self.source.fetch_countries().await?;

        let mut seen = HashSet::with_capacity(countries.len());
        for c in &countries {
            if !seen.insert(c.country_code.as_str()) {
                warn!("Duplicate country code {} from {}", c.country_code, self.source.name());
            }
        }

        self.collator.sort_by(&mut countries, |c| c.common_name.as_str());
        info!(
            "Fetched {} countries from {} (collation: {})",
            countries.len(),
            self.source.name(),
            self.collator.locale()
        );
        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingSource, StaticSource, country};
    use std::cmp::Ordering;

    fn names(countries: &[Country]) -> Vec<&str> {
        countries.iter().map(|c| c.common_name.as_str()).collect()
    }

    #[test]
    fn test_fetch_all_sorts_by_name() {
        let source = StaticSource::new(vec![country("Zedland", "ZED"), country("Aland", "ALA")]);
        let service = CountryListService::new(Arc::new(source), Collator::root());
        let countries = tokio_test::block_on(service.fetch_all()).unwrap();
        assert_eq!(names(&countries), vec!["Aland", "Zedland"]);
    }

    #[test]
    fn test_fetch_all_result_is_collation_sorted() {
        let source = StaticSource::new(vec![
            country("Zimbabwe", "ZWE"),
            country("Ísland", "ISL"),
            country("Curaçao", "CUW"),
            country("Cuba", "CUB"),
            country("Åland Islands", "ALA"),
            country("Afghanistan", "AFG"),
        ]);
        let service = CountryListService::new(Arc::new(source), Collator::root());
        let countries = tokio_test::block_on(service.fetch_all()).unwrap();

        assert_eq!(countries.len(), 6);
        for pair in countries.windows(2) {
            assert_ne!(
                service
                    .collator()
                    .compare(&pair[0].common_name, &pair[1].common_name),
                Ordering::Greater
            );
        }
        assert_eq!(
            names(&countries),
            vec!["Afghanistan", "Åland Islands", "Cuba", "Curaçao", "Ísland", "Zimbabwe"]
        );
    }

    #[test]
    fn test_fetch_all_uses_locale() {
        let source = StaticSource::new(vec![country("Åland", "ALA"), country("Zambia", "ZMB")]);
        let service = CountryListService::new(Arc::new(source), Collator::new("sv"));
        let countries = tokio_test::block_on(service.fetch_all()).unwrap();
        assert_eq!(names(&countries), vec!["Zambia", "Åland"]);
    }

    #[test]
    fn test_fetch_all_keeps_duplicates() {
        let source = StaticSource::new(vec![country("Congo", "COG"), country("Congo", "COG")]);
        let service = CountryListService::new(Arc::new(source), Collator::root());
        let countries = tokio_test::block_on(service.fetch_all()).unwrap();
        assert_eq!(countries.len(), 2);
    }

    #[test]
    fn test_fetch_all_propagates_source_error() {
        let source = FailingSource(FetchError::Network("connection refused".into()));
        let service = CountryListService::new(Arc::new(source), Collator::root());
        let err = tokio_test::block_on(service.fetch_all()).unwrap_err();
        assert_eq!(err, FetchError::Network("connection refused".into()));
    }

    #[test]
    fn test_reexported_helpers() {
        assert_eq!(format_population(1_500_000), "1.5M");
        let countries = vec![country("Peru", "PER")];
        assert_eq!(filter(&countries, "").len(), 1);
    }
}
