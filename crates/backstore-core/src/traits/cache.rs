//! Cache provider trait for pluggable caching backends.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for cache backends (networked or in-process).
///
/// Values are stored as text; typed access (numbers, JSON objects) is layered
/// on top by the cache manager. Every implementation is constructed with a
/// key prefix and applies it to every key it touches. Keys are never
/// de-prefixed on the way out.
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Name of the active implementation, for status reporting.
    fn provider_name(&self) -> &'static str;

    /// The namespace prefix applied to every key.
    fn prefix(&self) -> &str;

    /// Get a value by key. Returns `None` if the key does not exist or has expired.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, replacing any existing entry.
    ///
    /// `ttl` is authoritative for networked providers and advisory for the
    /// in-process fallback, which keeps entries until they are deleted.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether a key exists (and has not expired).
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Check that the cache backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
