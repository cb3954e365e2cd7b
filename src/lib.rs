//! Pokedex-Notion: a Pokédex-to-Notion publishing pipeline
//!
//! This crate fetches a range of Pokémon from PokeAPI, enriches each one with its
//! species record, maps the result onto a fixed Notion database schema, and creates
//! one Notion page per Pokémon at a paced rate.

pub mod config;
pub mod entity;
pub mod mapping;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod publish;
pub mod source;
pub mod state;

use thiserror::Error;

/// Main error type for pipeline operations
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid phase transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::RunPhase,
        to: state::RunPhase,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Missing environment variable: {0}")]
    MissingEnv(String),
}

/// Errors raised while retrieving a record from the data source
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed response from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },

    #[error("Record {id} is missing {field}")]
    MissingField { id: u32, field: String },
}

/// Errors raised while creating a page in the target database
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("HTTP error while publishing {name}: {source}")]
    Http { name: String, source: reqwest::Error },

    #[error("Notion rejected {name} ({status} {code}): {message}")]
    Api {
        name: String,
        status: u16,
        code: String,
        message: String,
    },

    #[error("Failed to serialize page: {0}")]
    Serialize(#[from] serde_json::Error),
}

// Re-export commonly used types
pub use config::{Config, Credentials};
pub use entity::{BaseStats, EnrichedEntity, RawEntity, SpeciesDetail};
pub use mapping::map_entity;
pub use normalize::normalize_name;
pub use pipeline::Pipeline;
pub use state::RunPhase;
