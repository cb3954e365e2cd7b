//! Async rate limiter for publish requests
//!
//! Wraps a `TokenBucket` and sleeps until a token is available. The publish
//! loop is sequential, so the limiter is owned by it and needs no locking.

use crate::state::TokenBucket;
use std::time::{Duration, Instant};

/// Paces requests to at most one per refill interval (after an initial burst)
#[derive(Debug)]
pub struct RateLimiter {
    bucket: TokenBucket,

    /// Number of tokens handed out so far
    acquired: u64,

    /// Total time spent waiting for tokens
    waited: Duration,
}

impl RateLimiter {
    /// Creates a limiter holding at most `burst` tokens, refilling one per `interval`
    pub fn new(burst: u32, interval: Duration) -> Self {
        Self {
            bucket: TokenBucket::new(burst, interval, Instant::now()),
            acquired: 0,
            waited: Duration::ZERO,
        }
    }

    /// Waits until a token is available and takes it
    ///
    /// Returns how long this call waited.
    pub async fn acquire(&mut self) -> Duration {
        let mut waited = Duration::ZERO;

        loop {
            match self.bucket.try_acquire(Instant::now()) {
                Ok(()) => break,
                Err(wait) => {
                    tracing::trace!("Rate limiter waiting {:?}", wait);
                    tokio::time::sleep(wait).await;
                    waited += wait;
                }
            }
        }

        self.acquired += 1;
        self.waited += waited;
        waited
    }

    pub fn acquired(&self) -> u64 {
        self.acquired
    }

    pub fn total_waited(&self) -> Duration {
        self.waited
    }
}
