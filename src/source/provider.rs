use std::fmt;

use async_trait::async_trait;

use crate::core::country::Country;

/// Errors that can occur while fetching the collection.
/// None of them are retried automatically; the user refreshes by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The endpoint answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not the expected JSON shape.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// A remote that can hand back the full, normalized collection.
///
/// Order is whatever the remote returns; sorting is the service's job.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError>;
}
