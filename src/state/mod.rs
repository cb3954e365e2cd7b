//! State module for tracking run progress
//!
//! # Components
//!
//! - `RunPhase`: Tracks which phase of the run is executing (fetch, enrich, publish, done)
//! - `TokenBucket`: Clock-driven token accounting used to pace publish requests

mod run_phase;
mod token_bucket;

// Re-export main types
pub use run_phase::RunPhase;
pub use token_bucket::TokenBucket;
