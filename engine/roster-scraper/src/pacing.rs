//! Pacing policies for spacing out requests to the roster site

use crate::config::{PacingConfig, PacingStrategy};
use crate::error::{Result, ScrapeError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Decides how long to wait before the next request
#[async_trait::async_trait]
pub trait RateLimitPolicy: Send + Sync {
    /// Wait until the next request may be sent
    async fn acquire(&self);
}

/// Build the policy described by `config`
pub fn policy_from_config(config: &PacingConfig) -> Result<Box<dyn RateLimitPolicy>> {
    match config.strategy {
        PacingStrategy::Fixed => Ok(Box::new(FixedInterval::new(config.interval()))),
        PacingStrategy::TokenBucket => {
            if config.burst == 0 || config.interval_ms == 0 {
                return Err(ScrapeError::config(
                    "Token bucket needs a non-zero burst and interval",
                ));
            }
            Ok(Box::new(TokenBucket::new(config.burst, config.interval())))
        }
        PacingStrategy::Disabled => Ok(Box::new(NoDelay)),
    }
}

/// Never waits
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait::async_trait]
impl RateLimitPolicy for NoDelay {
    async fn acquire(&self) {}
}

/// Sleeps the full `interval` before every request except the first
///
/// The pause does not shrink when the previous request was slow.
#[derive(Debug)]
pub struct FixedInterval {
    interval: Duration,
    started: AtomicBool,
}

impl FixedInterval {
    pub fn new(interval: Duration) -> Self {
        Self { interval, started: AtomicBool::new(false) }
    }

    /// How long to wait before the next request
    fn next_delay(&self) -> Duration {
        if self.started.swap(true, Ordering::SeqCst) {
            self.interval
        } else {
            Duration::ZERO
        }
    }
}

#[async_trait::async_trait]
impl RateLimitPolicy for FixedInterval {
    async fn acquire(&self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            debug!("Pacing: waiting {:?} before next request", delay);
            tokio::time::sleep(delay).await;
        }
    }
}

#[derive(Debug)]
struct BucketState {
    tokens: f64,
    last_refill: Instant,
}

/// Token bucket allowing bursts of `capacity` requests, refilled at one
/// token per `refill_interval`
#[derive(Debug)]
pub struct TokenBucket {
    capacity: f64,
    refill_interval: Duration,
    state: Mutex<BucketState>,
}

impl TokenBucket {
    pub fn new(capacity: u32, refill_interval: Duration) -> Self {
        let capacity = f64::from(capacity.max(1));
        Self {
            capacity,
            refill_interval,
            state: Mutex::new(BucketState { tokens: capacity, last_refill: Instant::now() }),
        }
    }

    /// Take a token at `now`, or return how long until one is available
    fn try_take(&self, now: Instant) -> std::result::Result<(), Duration> {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let elapsed = now.saturating_duration_since(state.last_refill);
        let refilled = elapsed.as_secs_f64() / self.refill_interval.as_secs_f64();
        state.tokens = (state.tokens + refilled).min(self.capacity);
        state.last_refill = now;

        if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            Ok(())
        } else {
            let missing = 1.0 - state.tokens;
            Err(self.refill_interval.mul_f64(missing))
        }
    }
}

#[async_trait::async_trait]
impl RateLimitPolicy for TokenBucket {
    async fn acquire(&self) {
        while let Err(delay) = self.try_take(Instant::now()) {
            debug!("Pacing: bucket empty, waiting {:?}", delay);
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_interval_first_request_is_free() {
        let policy = FixedInterval::new(Duration::from_millis(1000));
        assert_eq!(policy.next_delay(), Duration::ZERO);
    }

    #[test]
    fn test_fixed_interval_waits_full_interval_after_slow_request() {
        let policy = FixedInterval::new(Duration::from_millis(1000));

        assert_eq!(policy.next_delay(), Duration::ZERO);
        // Independent of how long the previous team took
        assert_eq!(policy.next_delay(), Duration::from_millis(1000));
        assert_eq!(policy.next_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_token_bucket_allows_burst_then_waits() {
        let bucket = TokenBucket::new(2, Duration::from_millis(500));
        let now = bucket.state.lock().unwrap().last_refill;

        assert!(bucket.try_take(now).is_ok());
        assert!(bucket.try_take(now).is_ok());
        assert_eq!(bucket.try_take(now), Err(Duration::from_millis(500)));

        // Half a token refilled after 250ms
        let later = now + Duration::from_millis(250);
        assert_eq!(bucket.try_take(later), Err(Duration::from_millis(250)));

        let refilled = now + Duration::from_millis(500);
        assert!(bucket.try_take(refilled).is_ok());
    }

    #[test]
    fn test_token_bucket_never_exceeds_capacity() {
        let bucket = TokenBucket::new(1, Duration::from_millis(100));
        let now = bucket.state.lock().unwrap().last_refill;

        let much_later = now + Duration::from_secs(60);
        assert!(bucket.try_take(much_later).is_ok());
        assert!(bucket.try_take(much_later).is_err());
    }

    #[test]
    fn test_policy_from_config() {
        let config =
            PacingConfig { strategy: PacingStrategy::TokenBucket, interval_ms: 0, burst: 3 };
        assert!(policy_from_config(&config).is_err());

        let config = PacingConfig { strategy: PacingStrategy::Disabled, interval_ms: 0, burst: 0 };
        assert!(policy_from_config(&config).is_ok());

        assert!(policy_from_config(&PacingConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_no_delay_returns_immediately() {
        let policy = NoDelay;
        let start = std::time::Instant::now();
        for _ in 0..100 {
            policy.acquire().await;
        }
        assert!(start.elapsed() < Duration::from_millis(100));
    }
}
