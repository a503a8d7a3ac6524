//! Redis cache provider implementation.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, warn};

use backstore_core::error::{AppError, ErrorKind};
use backstore_core::result::AppResult;
use backstore_core::traits::cache::CacheProvider;

use super::client::RedisClient;

/// Provider name reported by the Redis cache.
pub const PROVIDER_NAME: &str = "redis";

/// Redis-backed cache provider.
///
/// Every `set` writes with a millisecond expiry so the server drops the
/// entry once its TTL elapses.
#[derive(Debug, Clone)]
pub struct RedisCacheProvider {
    /// Redis client.
    client: RedisClient,
}

impl RedisCacheProvider {
    /// Create a new Redis cache provider.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AppError, logging the failed operation.
    fn map_err(op: &'static str, key: &str, e: redis::RedisError) -> AppError {
        warn!(op, key, error = %e, "Redis operation failed");
        AppError::with_source(ErrorKind::Cache, format!("Redis {op} failed for '{key}': {e}"), e)
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn prefix(&self) -> &str {
        self.client.prefix()
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Option<String> = conn
            .get(&full_key)
            .await
            .map_err(|e| Self::map_err("GET", &full_key, e))?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        if millis == 0 {
            return Err(AppError::validation(format!(
                "TTL for '{full_key}' must be at least one millisecond"
            )));
        }

        let mut conn = self.client.conn_mut();
        let _: () = conn
            .pset_ex(&full_key, value, millis)
            .await
            .map_err(|e| Self::map_err("PSETEX", &full_key, e))?;
        debug!(key = %full_key, ttl_ms = millis, "Stored Redis entry");
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = conn
            .del(&full_key)
            .await
            .map_err(|e| Self::map_err("DEL", &full_key, e))?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: bool = conn
            .exists(&full_key)
            .await
            .map_err(|e| Self::map_err("EXISTS", &full_key, e))?;
        Ok(result)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| Self::map_err("PING", "", e))?;
        Ok(pong == "PONG")
    }
}
