//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::country::Country;
use crate::source::{CountrySource, FetchError};

/// A source that returns a fixed collection without touching the network.
pub struct StaticSource {
    countries: Vec<Country>,
}

impl StaticSource {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

#[async_trait]
impl CountrySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        Ok(self.countries.clone())
    }
}

/// A source that always fails with the given error.
pub struct FailingSource(pub FetchError);

#[async_trait]
impl CountrySource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        Err(self.0.clone())
    }
}

/// Creates a minimal country with the given name and code.
pub fn country(name: &str, code: &str) -> Country {
    Country {
        common_name: name.to_string(),
        capital_names: Vec::new(),
        population: 0,
        region: String::new(),
        flag_image_url: String::new(),
        country_code: code.to_string(),
    }
}
