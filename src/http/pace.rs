//! Request pacing
//!
//! Page-fetch loops can hammer a provider API in a tight cycle; the pacer
//! spaces fetches out with a token bucket (governor).

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Pacing configuration
#[derive(Debug, Clone)]
pub struct PacerConfig {
    /// Maximum fetches per second
    pub fetches_per_second: u32,
    /// Burst size (max tokens in the bucket)
    pub burst: u32,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            fetches_per_second: 10,
            burst: 10,
        }
    }
}

impl PacerConfig {
    /// Create a pacing config
    pub fn new(fetches_per_second: u32, burst: u32) -> Self {
        Self {
            fetches_per_second,
            burst,
        }
    }
}

/// Token bucket pacer for page fetches
#[derive(Clone)]
pub struct Pacer {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl Pacer {
    /// Create a pacer with the given config
    pub fn new(config: &PacerConfig) -> Self {
        let one = NonZeroU32::MIN;
        let quota = Quota::per_second(NonZeroU32::new(config.fetches_per_second).unwrap_or(one))
            .allow_burst(NonZeroU32::new(config.burst).unwrap_or(one));

        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Wait until the next fetch may be issued
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Check whether a fetch may be issued immediately
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for Pacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pacer").finish()
    }
}
