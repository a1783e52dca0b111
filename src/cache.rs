//! In-memory cache of filtered top-article lists

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Filtered top lists keyed by the pageviews URL they were fetched from.
///
/// Entries are added once and never replaced or evicted, so a list handed out
/// stays valid for the lifetime of the process.
///
/// [`TopArticlesCache::get_or_populate`] is not single-flight: two requests that
/// miss the same key at the same time will both run their producer. The first
/// insert wins and the later result is dropped, which is harmless because both
/// producers read the same upstream month.
#[derive(Debug, Default)]
pub struct TopArticlesCache {
    entries: RwLock<HashMap<String, Arc<[String]>>>,
}

impl TopArticlesCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached list
    pub async fn get(&self, key: &str) -> Option<Arc<[String]>> {
        self.entries.read().await.get(key).cloned()
    }

    /// Return the list stored under `key`, running `producer` to fill it on a miss.
    ///
    /// A failing producer leaves the key empty so the next call retries.
    pub async fn get_or_populate<F, Fut, E>(&self, key: &str, producer: F) -> Result<Arc<[String]>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<String>, E>>,
    {
        if let Some(hit) = self.get(key).await {
            tracing::debug!("Top list cache hit: {}", key);
            return Ok(hit);
        }

        tracing::debug!("Top list cache miss: {}", key);
        let fresh: Arc<[String]> = producer().await?.into();

        // Lock is only taken after the producer finished
        let mut entries = self.entries.write().await;
        let stored = entries.entry(key.to_string()).or_insert(fresh);
        Ok(Arc::clone(stored))
    }

    /// Number of cached lists
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
