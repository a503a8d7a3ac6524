//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use backstore_cache::CacheManager;
use backstore_core::config::AppConfig;
use backstore_database::ItemManager;
use backstore_storage::BlobManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process-wide request counter, bumped by `POST /inc`
    pub counter: Arc<AtomicU64>,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,
    /// Blob manager (S3 or in-memory)
    pub blobs: Arc<BlobManager>,
    /// Item manager (PostgreSQL or in-memory)
    pub items: Arc<ItemManager>,
}

impl AppState {
    /// Assemble state from already-selected providers.
    pub fn new(
        config: AppConfig,
        cache: CacheManager,
        blobs: BlobManager,
        items: ItemManager,
    ) -> Self {
        Self {
            config: Arc::new(config),
            counter: Arc::new(AtomicU64::new(0)),
            cache: Arc::new(cache),
            blobs: Arc::new(blobs),
            items: Arc::new(items),
        }
    }

    /// Current counter value.
    pub fn counter_value(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Increment the counter and return the new value.
    pub fn bump_counter(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}
