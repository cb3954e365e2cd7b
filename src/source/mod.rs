//! Data source module for PokeAPI retrieval
//!
//! This module contains:
//! - HTTP client construction with the configured user agent and timeouts
//! - The primary record fetch (`/pokemon/{id}`)
//! - The species detail fetch (`/pokemon-species/{id}`)
//! - Response models and their conversion into pipeline entities

mod fetcher;
pub mod models;

pub use fetcher::{build_http_client, PokeApiClient};
