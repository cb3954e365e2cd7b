//! Integration tests for the publish pipeline
//!
//! These tests use wiremock to stand in for both PokeAPI and the Notion API
//! and drive complete runs end-to-end, through the library and the binary.

mod cli_tests;
mod pipeline_tests;
