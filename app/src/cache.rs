//! Response cache for TMDB lookups.
//!
//! The client asks the cache before going to the network and stores the raw
//! JSON afterwards. Entries expire after a configurable time to live.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use serde_json::Value;
use tracing::debug;

/// Endpoint plus query pairs, with the pairs sorted so that the order they
/// were given in does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    endpoint: String,
    query: Vec<(String, String)>,
}

impl CacheKey {
    pub fn new(endpoint: &str, query: &[(&str, String)]) -> Self {
        let mut query: Vec<(String, String)> = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        query.sort();
        Self {
            endpoint: endpoint.to_string(),
            query,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Option<Value>;
    async fn insert(&self, key: CacheKey, value: Value);
}

/// Never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

#[async_trait]
impl ResponseCache for NoCache {
    async fn get(&self, _key: &CacheKey) -> Option<Value> {
        None
    }

    async fn insert(&self, _key: CacheKey, _value: Value) {}
}

/// In-process cache; every entry lives for `ttl` after it was inserted and at
/// most `max_capacity` entries are kept.
#[derive(Clone)]
pub struct MemoryCache {
    ttl: Duration,
    entries: Cache<CacheKey, Value>,
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

impl MemoryCache {
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self { ttl, entries }
    }

    /// Live entries, after pending expirations and evictions have run.
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ResponseCache for MemoryCache {
    async fn get(&self, key: &CacheKey) -> Option<Value> {
        let value = self.entries.get(key).await;
        if value.is_none() {
            debug!("Cache miss: {}", key.endpoint());
        }
        value
    }

    async fn insert(&self, key: CacheKey, value: Value) {
        self.entries.insert(key, value).await;
    }
}
