pub mod provider;
pub mod rest_countries;

pub use provider::{CountrySource, FetchError};
pub use rest_countries::RestCountriesSource;
