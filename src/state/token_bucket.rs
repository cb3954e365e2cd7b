use std::time::{Duration, Instant};

/// Token bucket used to pace outgoing requests
///
/// One token accrues every `refill_interval`, up to `capacity`. The bucket
/// starts empty, so the very first request also waits one interval.
///
/// All methods take the current instant explicitly; the bucket never reads
/// the clock itself, which keeps its timing behavior testable.
#[derive(Debug, Clone)]
pub struct TokenBucket {
    /// Maximum number of tokens held at once
    capacity: u32,

    /// Time to accrue one token
    refill_interval: Duration,

    /// Tokens currently available
    tokens: u32,

    /// Instant up to which accrued time has been converted into tokens
    last_refill: Instant,
}

impl TokenBucket {
    /// Creates an empty bucket
    ///
    /// A zero capacity is treated as 1 and a zero interval as 1ms.
    pub fn new(capacity: u32, refill_interval: Duration, now: Instant) -> Self {
        Self {
            capacity: capacity.max(1),
            refill_interval: refill_interval.max(Duration::from_millis(1)),
            tokens: 0,
            last_refill: now,
        }
    }

    /// Converts elapsed time into tokens
    fn refill(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_refill);
        let accrued = elapsed.as_nanos() / self.refill_interval.as_nanos();
        if accrued == 0 {
            return;
        }

        let room = u128::from(self.capacity - self.tokens);
        if accrued >= room {
            // Full bucket: time spent full does not bank extra tokens
            self.tokens = self.capacity;
            self.last_refill = now;
        } else {
            self.tokens += accrued as u32;
            let consumed = self.refill_interval.as_nanos() * accrued;
            self.last_refill += Duration::from_nanos(consumed as u64);
        }
    }

    /// Takes one token if available
    ///
    /// # Returns
    ///
    /// * `Ok(())` - A token was taken
    /// * `Err(Duration)` - How long to wait before a token will be available
    pub fn try_acquire(&mut self, now: Instant) -> Result<(), Duration> {
        self.refill(now);

        if self.tokens > 0 {
            self.tokens -= 1;
            return Ok(());
        }

        let since_refill = now.saturating_duration_since(self.last_refill);
        Err(self.refill_interval.saturating_sub(since_refill))
    }
}
