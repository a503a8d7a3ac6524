//! Redis connection management.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use redis::Client;
use redis::aio::ConnectionManager;
use tracing::info;

use backstore_core::config::cache::CacheConfig;
use backstore_core::error::{AppError, ErrorKind};
use backstore_core::result::AppResult;

/// Redis client wrapper with connection management.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis connection manager (multiplexed, reconnecting).
    conn: ConnectionManager,
    /// Key prefix for all keys.
    key_prefix: String,
}

impl std::fmt::Debug for RedisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisClient")
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}

impl RedisClient {
    /// Connect to Redis and register the configured client name.
    pub async fn connect(config: &CacheConfig, key_prefix: &str) -> AppResult<Self> {
        let url = connection_url(config);
        info!(
            url = %mask_redis_url(&url),
            client_name = %config.client_name,
            "Connecting to Redis"
        );

        let client = Client::open(url.as_str()).map_err(|e| {
            AppError::with_source(ErrorKind::Cache, "Failed to create Redis client", e)
        })?;

        let mut conn = ConnectionManager::new(client).await.map_err(|e| {
            AppError::with_source(ErrorKind::Cache, "Failed to connect to Redis", e)
        })?;

        if !config.client_name.is_empty() {
            let _: () = redis::cmd("CLIENT")
                .arg("SETNAME")
                .arg(&config.client_name)
                .query_async(&mut conn)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Cache, "Failed to set Redis client name", e)
                })?;
        }

        info!("Successfully connected to Redis");
        Ok(Self {
            conn,
            key_prefix: key_prefix.to_string(),
        })
    }

    /// Get a mutable clone of the connection manager.
    pub fn conn_mut(&self) -> ConnectionManager {
        self.conn.clone()
    }

    /// Build a full key with the configured prefix.
    pub fn prefixed_key(&self, key: &str) -> String {
        format!("{}{key}", self.key_prefix)
    }

    /// Return the key prefix.
    pub fn prefix(&self) -> &str {
        &self.key_prefix
    }
}

/// Build the connection URL from the cache settings.
///
/// TLS selects the `rediss://` scheme, which also sends the host name for SNI.
fn connection_url(config: &CacheConfig) -> String {
    let scheme = if config.use_tls { "rediss" } else { "redis" };
    if config.password.is_empty() {
        format!("{scheme}://{}:{}", config.host, config.port)
    } else {
        let password = utf8_percent_encode(&config.password, NON_ALPHANUMERIC);
        format!("{scheme}://:{password}@{}:{}", config.host, config.port)
    }
}

/// Mask password in Redis URL for safe logging.
fn mask_redis_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos >= scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}
