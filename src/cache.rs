// TTL response cache: get-or-compute keyed by route. The serving layer owns
// caching policy; the aggregators stay pure request/response functions.

use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

struct CacheEntry {
    stored_at: Instant,
    value: Arc<Value>,
}

/// Serves a previously computed response for `ttl` before recomputing.
/// Failures are never stored; the next request recomputes. The lock is not
/// held across the compute future, so concurrent misses may compute in
/// parallel (last write wins) - stampede control is out of scope.
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get_or_compute<F, Fut, E>(
        &self,
        key: &str,
        compute: F,
    ) -> std::result::Result<Arc<Value>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<Value, E>>,
    {
        if let Some(value) = self.get_fresh(key).await {
            tracing::debug!(key, "cache hit");
            return Ok(value);
        }
        let value = Arc::new(compute().await?);
        let mut entries = self.entries.lock().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                stored_at: Instant::now(),
                value: value.clone(),
            },
        );
        Ok(value)
    }

    async fn get_fresh(&self, key: &str) -> Option<Arc<Value>> {
        let entries = self.entries.lock().await;
        let entry = entries.get(key)?;
        (entry.stored_at.elapsed() < self.ttl).then(|| entry.value.clone())
    }
}
