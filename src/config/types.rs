use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Pokedex-Notion
///
/// Every section has defaults, so an empty file (or no file at all) describes the
/// standard run: ids 1 through 5 from the public PokeAPI into Notion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub notion: NotionConfig,
    pub publisher: PublisherConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
}

/// Data source configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of the PokeAPI REST endpoints
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// First identifier to fetch (inclusive)
    pub start: u32,

    /// Last identifier to fetch (inclusive)
    pub end: u32,

    /// Per-request timeout (seconds), applied to every HTTP client
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            start: 1,
            end: 5,
            timeout_secs: 30,
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Replaces whichever range bounds are given
    pub fn override_range(&mut self, start: Option<u32>, end: Option<u32>) {
        if let Some(start) = start {
            self.start = start;
        }
        if let Some(end) = end {
            self.end = end;
        }
    }

    /// Number of identifiers in the configured range
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Notion API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// Base URL of the Notion REST API
    #[serde(rename = "api-base")]
    pub api_base: String,

    /// Value sent in the `Notion-Version` header
    #[serde(rename = "api-version")]
    pub api_version: String,

    /// Environment variable holding the integration token
    #[serde(rename = "token-env")]
    pub token_env: String,

    /// Environment variable holding the destination database id
    #[serde(rename = "database-id-env")]
    pub database_id_env: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.notion.com/v1".to_string(),
            api_version: "2022-06-28".to_string(),
            token_env: "NOTION_KEY".to_string(),
            database_id_env: "NOTION_DATABASE_ID".to_string(),
        }
    }
}

/// What to do with an entity whose species lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailFailurePolicy {
    /// Publish the page with blank detail fields
    #[default]
    Publish,
    /// Leave the entity out of the publish phase
    Skip,
}

/// Publish pacing configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    /// Time for the rate limiter to refill one token (milliseconds)
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,

    /// Maximum number of tokens the rate limiter can hold
    pub burst: u32,

    /// Policy for entities missing species detail
    #[serde(rename = "detail-failure")]
    pub detail_failure: DetailFailurePolicy,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            delay_ms: 300,
            burst: 1,
            detail_failure: DetailFailurePolicy::Publish,
        }
    }
}

impl PublisherConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the client
    pub name: String,

    /// Version of the client
    pub version: String,

    /// URL with information about the client
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "pokedex-notion".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        format!("{}/{} (+{})", self.name, self.version, self.contact_url)
    }
}
