//! Cache manager that dispatches to the configured provider.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use backstore_core::config::cache::CacheConfig;
use backstore_core::error::{AppError, ErrorKind};
use backstore_core::result::AppResult;
use backstore_core::traits::cache::CacheProvider;

/// Cache manager that wraps the selected cache provider.
///
/// The provider is chosen once at construction time. On top of the raw text
/// interface the manager offers typed accessors: numbers are stored in their
/// textual form and objects as JSON.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// The inner cache provider.
    inner: Arc<dyn CacheProvider>,
}

impl CacheManager {
    /// Create a cache manager for the given key prefix.
    ///
    /// A non-empty `config.host` selects Redis; otherwise the in-memory
    /// fallback is used. Failing to reach a configured Redis is an error.
    pub async fn new(config: &CacheConfig, prefix: &str) -> AppResult<Self> {
        let inner: Arc<dyn CacheProvider> = if config.is_configured() {
            Self::networked(config, prefix).await?
        } else {
            Self::fallback(prefix)?
        };

        info!(
            provider = inner.provider_name(),
            prefix, "Cache provider selected"
        );
        Ok(Self { inner })
    }

    #[cfg(feature = "redis-backend")]
    async fn networked(config: &CacheConfig, prefix: &str) -> AppResult<Arc<dyn CacheProvider>> {
        info!(host = %config.host, port = config.port, tls = config.use_tls, "Initializing Redis cache provider");
        let client = crate::redis::RedisClient::connect(config, prefix).await?;
        Ok(Arc::new(crate::redis::RedisCacheProvider::new(client)))
    }

    #[cfg(not(feature = "redis-backend"))]
    async fn networked(_config: &CacheConfig, _prefix: &str) -> AppResult<Arc<dyn CacheProvider>> {
        Err(AppError::configuration(
            "A cache host is configured but the redis-backend feature is disabled",
        ))
    }

    #[cfg(feature = "memory")]
    fn fallback(prefix: &str) -> AppResult<Arc<dyn CacheProvider>> {
        info!("Initializing in-memory cache provider");
        Ok(Arc::new(crate::memory::MemoryCacheProvider::new(prefix)))
    }

    #[cfg(not(feature = "memory"))]
    fn fallback(_prefix: &str) -> AppResult<Arc<dyn CacheProvider>> {
        Err(AppError::configuration(
            "No cache host configured and the memory feature is disabled",
        ))
    }

    /// Create a cache manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn CacheProvider>) -> Self {
        Self { inner: provider }
    }

    /// Name of the active provider.
    pub fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    /// The namespace prefix applied to every key.
    pub fn prefix(&self) -> &str {
        self.inner.prefix()
    }

    // ── Setters ────────────────────────────────────────────────

    /// Store a string value.
    pub async fn set_string(&self, key: &str, value: &str, ttl_seconds: u64) -> AppResult<()> {
        self.inner
            .set(key, value, Duration::from_secs(ttl_seconds))
            .await
    }

    /// Store a number in its textual form.
    pub async fn set_number(&self, key: &str, value: f64, ttl_seconds: u64) -> AppResult<()> {
        self.set_string(key, &value.to_string(), ttl_seconds).await
    }

    /// Store any serializable value as JSON.
    pub async fn set_object<T>(&self, key: &str, value: &T, ttl_seconds: u64) -> AppResult<()>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set_string(key, &json, ttl_seconds).await
    }

    // ── Getters ────────────────────────────────────────────────

    /// Get a string value.
    pub async fn get_string(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    /// Get a number. A stored value that is not numeric is a serialization error.
    pub async fn get_number(&self, key: &str) -> AppResult<Option<f64>> {
        match self.inner.get(key).await? {
            Some(raw) => raw.trim().parse::<f64>().map(Some).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Serialization,
                    format!("Cached value for '{key}' is not a number"),
                    e,
                )
            }),
            None => Ok(None),
        }
    }

    /// Get a JSON value and deserialize it into `T`.
    ///
    /// A stored value that does not decode into `T` is a serialization error.
    pub async fn get_object<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.inner.get(key).await? {
            Some(raw) => {
                let parsed = serde_json::from_str(&raw)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    // ── Misc ───────────────────────────────────────────────────

    /// Delete a key. Missing keys are ignored.
    pub async fn delete(&self, key: &str) -> AppResult<()> {
        self.inner.delete(key).await
    }

    /// Check whether a key exists.
    pub async fn exists(&self, key: &str) -> AppResult<bool> {
        self.inner.exists(key).await
    }

    /// Check that the cache backend is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
