//! Delivery cache: request identifiers already relayed, with a fixed TTL.
//!
//! Process-local and empty on startup. Expired entries are ignored on read
//! and removed by [`DeliveryCache::sweep`], which [`CacheSweeper`] runs
//! periodically.
//!
//! `has` followed by `insert` is not atomic. Two overlapping deliveries of
//! the same identifier can both pass the check, so suppression is
//! best-effort: at least once, usually exactly once.

mod sweeper;

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

pub use sweeper::CacheSweeper;

/// In-memory set of processed request identifiers.
#[derive(Debug)]
pub struct DeliveryCache {
    ttl: Duration,
    /// Expiry deadline keyed by request identifier.
    entries: RwLock<HashMap<String, Instant>>,
}

impl DeliveryCache {
    /// Create an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// True iff `key` was inserted less than one TTL ago.
    pub async fn has(&self, key: &str) -> bool {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .is_some_and(|expires_at| *expires_at > Instant::now())
    }

    /// Mark `key` as seen from now until now + TTL.
    pub async fn insert(&self, key: impl Into<String>) {
        let expires_at = Instant::now() + self.ttl;
        let mut entries = self.entries.write().await;
        entries.insert(key.into(), expires_at);
    }

    /// Remove expired entries. Returns how many were dropped.
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, expires_at| *expires_at > now);
        let removed = before - entries.len();

        if removed > 0 {
            debug!(removed, remaining = entries.len(), "Swept expired cache entries");
        }
        removed
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
