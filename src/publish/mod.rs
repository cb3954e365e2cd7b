//! Page publishing module
//!
//! This module handles:
//! - Authenticated page creation against the Notion API
//! - Pacing of publish requests through a token-bucket rate limiter

mod limiter;
mod notion;

pub use limiter::RateLimiter;
pub use notion::{CreatedPage, NotionClient};
