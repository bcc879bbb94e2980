//! REST Countries (v3.1) source.
//!
//! One request, `GET {base_url}/all?fields=...`, returning a JSON array.
//! The wire shape nests things the UI wants flat:
//!
//! ```text
//! { "name": { "common": "Peru", ... },     →  common_name
//!   "capital": ["Lima"],                   →  capital_names (may be absent)
//!   "population": 32971846,                →  population
//!   "region": "Americas",                  →  region
//!   "flags": { "png": "https://...", ... },→  flag_image_url
//!   "cca3": "PER" }                        →  country_code
//! ```

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::core::country::Country;
use crate::source::{CountrySource, FetchError};

/// Field selection sent with every request. Keeps the payload small.
pub const FIELDS: &str = "name,capital,population,region,flags,cca3";

// ============================================================================
// REST Countries API Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct RawName {
    common: String,
}

#[derive(Deserialize, Debug, Default)]
struct RawFlags {
    #[serde(default)]
    png: String,
}

#[derive(Deserialize, Debug)]
struct RawCountry {
    name: RawName,
    #[serde(default)]
    capital: Option<Vec<String>>,
    population: u64,
    #[serde(default)]
    region: String,
    #[serde(default)]
    flags: RawFlags,
    cca3: String,
}

// ============================================================================
// Translation Layer
// ============================================================================

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        Country {
            common_name: raw.name.common,
            capital_names: raw.capital.unwrap_or_default(),
            population: raw.population,
            region: raw.region,
            flag_image_url: raw.flags.png,
            country_code: raw.cca3,
        }
    }
}

/// Parses a response body into normalized countries.
pub fn parse_countries(body: &str) -> Result<Vec<Country>, FetchError> {
    let raw: Vec<RawCountry> =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    Ok(raw.into_iter().map(Country::from).collect())
}

// ============================================================================
// Provider Implementation
// ============================================================================

pub struct RestCountriesSource {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/all?fields={}", self.base_url, FIELDS)
    }
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        let url = self.endpoint();
        info!("REST Countries request: GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("REST Countries response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("REST Countries API error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("REST Countries body: {} bytes", body.len());

        let countries = parse_countries(&body).inspect_err(|e| warn!("{}", e))?;
        info!("REST Countries returned {} records", countries.len());
        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let body = r#"[{
            "name": {"common": "Peru", "official": "Republic of Peru", "nativeName": {}},
            "capital": ["Lima"],
            "population": 32971846,
            "region": "Americas",
            "flags": {"png": "https://flagcdn.com/w320/pe.png", "svg": "https://flagcdn.com/pe.svg", "alt": "..."},
            "cca3": "PER"
        }]"#;
        let countries = parse_countries(body).unwrap();
        assert_eq!(
            countries,
            vec![Country {
                common_name: "Peru".to_string(),
                capital_names: vec!["Lima".to_string()],
                population: 32_971_846,
                region: "Americas".to_string(),
                flag_image_url: "https://flagcdn.com/w320/pe.png".to_string(),
                country_code: "PER".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_capital_normalizes_to_empty() {
        let body = r#"[{"name": {"common": "Antarctica"}, "population": 1000,
            "region": "Antarctic", "flags": {"png": "x.png"}, "cca3": "ATA"}]"#;
        let countries = parse_countries(body).unwrap();
        assert!(countries[0].capital_names.is_empty());
    }

    #[test]
    fn test_null_capital_and_missing_optional_fields() {
        let body = r#"[{"name": {"common": "Nowhere"}, "capital": null,
            "population": 0, "cca3": "NOW"}]"#;
        let countries = parse_countries(body).unwrap();
        assert!(countries[0].capital_names.is_empty());
        assert_eq!(countries[0].region, "");
        assert_eq!(countries[0].flag_image_url, "");
    }

    #[test]
    fn test_preserves_remote_order() {
        let body = r#"[
            {"name": {"common": "Zedland"}, "population": 1, "cca3": "ZED"},
            {"name": {"common": "Aland"}, "population": 2, "cca3": "ALA"}
        ]"#;
        let names: Vec<String> = parse_countries(body)
            .unwrap()
            .into_iter()
            .map(|c| c.common_name)
            .collect();
        assert_eq!(names, vec!["Zedland", "Aland"]);
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let body = r#"[{"name": {"common": "Peru"}, "population": 1}]"#;
        assert!(matches!(parse_countries(body), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_negative_population_is_parse_error() {
        let body = r#"[{"name": {"common": "Peru"}, "population": -5, "cca3": "PER"}]"#;
        assert!(matches!(parse_countries(body), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_non_array_body_is_parse_error() {
        let body = r#"{"status": 404, "message": "Not Found"}"#;
        assert!(matches!(parse_countries(body), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let source =
            RestCountriesSource::new("http://localhost:9/v3.1/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            source.endpoint(),
            "http://localhost:9/v3.1/all?fields=name,capital,population,region,flags,cca3"
        );
    }
}
