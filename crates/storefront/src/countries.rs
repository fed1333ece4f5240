//! Country list for the registration form.
//!
//! Best-effort enrichment: the list is fetched from a REST endpoint and any
//! failure (network, status, JSON, empty result) falls back to a short static
//! list. Nothing in the core depends on it.

use std::future::Future;

use serde::Deserialize;
use sportshop_core::collate::compare_names;
use thiserror::Error;
use url::Url;

use crate::config::CountriesConfig;

/// Used whenever the remote list is unavailable.
pub const FALLBACK_COUNTRIES: [&str; 6] = [
    "United States",
    "India",
    "United Kingdom",
    "Germany",
    "France",
    "Canada",
];

/// Country fetch errors. Always absorbed by [`load_countries`].
#[derive(Debug, Error)]
pub enum CountryError {
    #[error("country fetch disabled (offline)")]
    Offline,
    #[error("country request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Source of country names.
pub trait CountrySource {
    /// Fetch country names in any order.
    fn fetch(&self) -> impl Future<Output = Result<Vec<String>, CountryError>> + Send;
}

/// Fetches `[{ "name": { "common": "..." } }]` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCountrySource {
    client: reqwest::Client,
    url: Url,
}

#[derive(Deserialize)]
struct CountryRecord {
    name: Option<CountryName>,
}

#[derive(Deserialize)]
struct CountryName {
    common: Option<String>,
}

impl HttpCountrySource {
    /// Create a source for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns `CountryError::Http` if the HTTP client cannot be built.
    pub fn new(config: &CountriesConfig) -> Result<Self, CountryError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

impl CountrySource for HttpCountrySource {
    async fn fetch(&self) -> Result<Vec<String>, CountryError> {
        let records: Vec<CountryRecord> = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(records
            .into_iter()
            .filter_map(|record| record.name.and_then(|name| name.common))
            .collect())
    }
}

/// Source that never reaches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineCountrySource;

impl CountrySource for OfflineCountrySource {
    async fn fetch(&self) -> Result<Vec<String>, CountryError> {
        Err(CountryError::Offline)
    }
}

/// Country names sorted for display, or the fallback list.
pub async fn load_countries<C: CountrySource + Sync>(source: &C) -> Vec<String> {
    match source.fetch().await {
        Ok(names) => {
            let mut names: Vec<String> = names
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect();
            if names.is_empty() {
                tracing::warn!("country source returned no names, using fallback list");
                return fallback();
            }
            names.sort_by(|a, b| compare_names(a, b));
            names.dedup();
            tracing::debug!(count = names.len(), "loaded countries");
            names
        }
        Err(CountryError::Offline) => fallback(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load countries, using fallback list");
            fallback()
        }
    }
}

fn fallback() -> Vec<String> {
    FALLBACK_COUNTRIES.iter().map(ToString::to_string).collect()
}
