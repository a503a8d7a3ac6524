//! In-memory fallback cache using the moka crate.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use backstore_core::result::AppResult;
use backstore_core::traits::cache::CacheProvider;

/// Provider name reported by the fallback cache.
pub const PROVIDER_NAME: &str = "memory";

/// In-memory cache provider using moka.
///
/// The underlying cache is unbounded and built without a time-to-live, so
/// entries stay until they are deleted or overwritten. TTL arguments are
/// accepted for signature compatibility and ignored.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache, keyed by prefixed key.
    cache: Cache<String, String>,
    /// Namespace prefix applied to every key.
    prefix: String,
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache with its own private store.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_store(prefix, Cache::builder().build())
    }

    /// Create an in-memory cache over an existing store.
    ///
    /// Several providers with different prefixes can share one store; the
    /// prefixes keep their keys apart.
    pub fn with_store(prefix: impl Into<String>, cache: Cache<String, String>) -> Self {
        Self {
            cache,
            prefix: prefix.into(),
        }
    }

    fn prefixed_key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(&self.prefixed_key(key)).await)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let full_key = self.prefixed_key(key);
        debug!(key = %full_key, ttl_secs = ttl.as_secs(), "Ignoring TTL for in-memory entry");
        self.cache.insert(full_key, value.to_string()).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.invalidate(&self.prefixed_key(key)).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.cache.contains_key(&self.prefixed_key(key)))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
