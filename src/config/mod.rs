//! Configuration module for Pokedex-Notion
//!
//! This module handles loading, parsing, and validating the TOML configuration file,
//! and resolving the Notion credentials from the environment.
//!
//! # Example
//!
//! ```no_run
//! use pokedex_notion::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pokedex.toml")).unwrap();
//! println!("Will fetch ids {} through {}", config.source.start, config.source.end);
//! ```

mod credentials;
mod parser;
mod types;
mod validation;

// Re-export types
pub use credentials::Credentials;
pub use types::{
    Config, DetailFailurePolicy, NotionConfig, PublisherConfig, SourceConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config, read_config};
pub use validation::validate;
