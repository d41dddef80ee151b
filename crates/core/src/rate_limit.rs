//! Fixed-window rate limiter with injected storage.
//!
//! The decision logic is a pure function of the hit history and the caller's
//! clock: `now` is always passed in, so tests drive time explicitly and a
//! multi-instance deployment can swap [`InMemoryStore`] for a shared backend
//! without touching calling code.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Duration;

use crate::types::Timestamp;

/// Default contact endpoint policy: 5 requests per 60-second window.
pub const DEFAULT_LIMIT: u32 = 5;
pub const DEFAULT_WINDOW_SECS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied,
}

/// Storage strategy for rate-limit hit tracking.
pub trait RateLimitStore: Send + Sync {
    /// Record a hit for `key` at `now`, discard hits older than
    /// `now - window`, and return the number of hits remaining in the
    /// window, including this one.
    fn record(&self, key: &str, now: Timestamp, window: Duration) -> u32;
}

/// Process-local store: a map of per-key hit timestamps. Not persisted and
/// not shared across server instances.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    hits: Mutex<HashMap<String, Vec<Timestamp>>>,
}

impl RateLimitStore for InMemoryStore {
    fn record(&self, key: &str, now: Timestamp, window: Duration) -> u32 {
        let mut hits = self.hits.lock().expect("rate limit store mutex poisoned");
        let entry = hits.entry(key.to_string()).or_default();

        let cutoff = now - window;
        entry.retain(|t| *t > cutoff);
        entry.push(now);
        entry.len() as u32
    }
}

/// Fixed-window limiter over a [`RateLimitStore`].
pub struct RateLimiter {
    store: Box<dyn RateLimitStore>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(store: Box<dyn RateLimitStore>, limit: u32, window_secs: i64) -> Self {
        Self {
            store,
            limit,
            window: Duration::seconds(window_secs),
        }
    }

    /// Limiter backed by [`InMemoryStore`], for single-instance deployments.
    pub fn in_memory(limit: u32, window_secs: i64) -> Self {
        Self::new(Box::new(InMemoryStore::default()), limit, window_secs)
    }

    /// Record a hit for `key` at `now` and decide whether it is allowed.
    ///
    /// Denied hits still count toward the window, so a client hammering the
    /// endpoint does not earn an earlier reset.
    pub fn check(&self, key: &str, now: Timestamp) -> Decision {
        if self.store.record(key, now, self.window) <= self.limit {
            Decision::Allowed
        } else {
            Decision::Denied
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn allows_up_to_the_limit() {
        let limiter = RateLimiter::in_memory(5, 60);
        for _ in 0..5 {
            assert_eq!(limiter.check("1.2.3.4", t0()), Decision::Allowed);
        }
        assert_eq!(limiter.check("1.2.3.4", t0()), Decision::Denied);
    }

    #[test]
    fn window_expiry_readmits_the_key() {
        let limiter = RateLimiter::in_memory(5, 60);
        for _ in 0..6 {
            limiter.check("1.2.3.4", t0());
        }

        let later = t0() + Duration::seconds(61);
        assert_eq!(limiter.check("1.2.3.4", later), Decision::Allowed);
    }

    #[test]
    fn hits_at_the_window_edge_still_count() {
        let limiter = RateLimiter::in_memory(1, 60);
        assert_eq!(limiter.check("k", t0()), Decision::Allowed);

        // Exactly 60s later the first hit is on the cutoff and is discarded.
        let edge = t0() + Duration::seconds(60);
        assert_eq!(limiter.check("k", edge), Decision::Allowed);
    }

    #[test]
    fn keys_are_tracked_independently() {
        let limiter = RateLimiter::in_memory(1, 60);
        assert_eq!(limiter.check("a", t0()), Decision::Allowed);
        assert_eq!(limiter.check("b", t0()), Decision::Allowed);
        assert_eq!(limiter.check("a", t0()), Decision::Denied);
    }

    #[test]
    fn denied_hits_extend_the_window() {
        let limiter = RateLimiter::in_memory(1, 60);
        limiter.check("k", t0());
        limiter.check("k", t0() + Duration::seconds(30)); // denied, still recorded

        // 61s after the first hit, the denied hit at +30s is still in the
        // window, so the key remains blocked.
        assert_eq!(
            limiter.check("k", t0() + Duration::seconds(61)),
            Decision::Denied
        );
    }
}
