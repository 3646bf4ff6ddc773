//! Query cache configuration.

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::Deserialize;

const DEFAULT_CAPACITY: usize = 256;
const DEFAULT_TTL_SECS: u64 = 60;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Bounds of the process-wide query cache, from the `[cache]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryCacheConfig {
    /// Maximum number of stored query results.
    pub capacity: usize,
    /// Seconds a stored result is served without refetching.
    pub ttl_secs: u64,
    /// Upper bound on a single upstream fetch.
    pub fetch_timeout_secs: u64,
}

impl Default for QueryCacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl_secs: DEFAULT_TTL_SECS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl QueryCacheConfig {
    /// Returns the capacity as NonZeroUsize, clamping to 1 if zero.
    pub fn capacity_non_zero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.capacity).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
