//! HTTP fetcher implementation
//!
//! This module handles all requests to the data source:
//! - Building the HTTP client with the configured user agent and timeouts
//! - Fetching a primary record by identifier
//! - Fetching the species detail record by identifier
//! - Classifying failures into `FetchError` variants
//!
//! There is no retry: a failed identifier is reported once and skipped.

use crate::config::{SourceConfig, UserAgentConfig};
use crate::entity::{RawEntity, SpeciesDetail};
use crate::source::models::{PokemonResponse, SpeciesResponse};
use crate::FetchError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `agent` - The user agent configuration
/// * `timeout` - Total time allowed for a single request
///
/// # Example
///
/// ```no_run
/// use pokedex_notion::config::UserAgentConfig;
/// use pokedex_notion::source::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(
    agent: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(agent.header_value())
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Read-only client for the PokeAPI endpoints
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Builds a client from the source and user agent sections of the config
    pub fn from_config(
        source: &SourceConfig,
        agent: &UserAgentConfig,
    ) -> Result<Self, reqwest::Error> {
        let client = build_http_client(agent, source.timeout())?;
        Ok(Self::new(client, source.base_url.as_str()))
    }

    pub fn pokemon_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }

    pub fn species_url(&self, id: u32) -> String {
        format!("{}/pokemon-species/{}", self.base_url, id)
    }

    /// Fetches the primary record for `id` and converts it into a `RawEntity`
    pub async fn fetch_pokemon(&self, id: u32) -> Result<RawEntity, FetchError> {
        let response: PokemonResponse = self.get_json(&self.pokemon_url(id)).await?;
        response.into_raw_entity()
    }

    /// Fetches the species record for `id` and extracts its detail fields
    pub async fn fetch_species(&self, id: u32) -> Result<SpeciesDetail, FetchError> {
        let response: SpeciesResponse = self.get_json(&self.species_url(id)).await?;
        response.into_detail(id)
    }

    /// Sends one GET request and decodes the JSON body
    ///
    /// # Error Mapping
    ///
    /// | Condition | Error |
    /// |-----------|-------|
    /// | Connection/timeout/TLS failure | `FetchError::Http` |
    /// | Non-2xx status | `FetchError::Status` |
    /// | Body is not the expected JSON | `FetchError::Decode` |
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
