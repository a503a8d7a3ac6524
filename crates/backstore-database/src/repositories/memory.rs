//! In-memory fallback item store.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use backstore_core::result::AppResult;
use backstore_core::traits::items::ItemStore;

/// Provider name reported by the fallback item store.
pub const PROVIDER_NAME: &str = "memory";

/// Dataset served by the fallback store.
pub const DEFAULT_ITEMS: [i64; 5] = [1, 2, 3, 4, 5];

/// Item store that serves a fixed dataset, populated on first use.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: OnceCell<Vec<i64>>,
}

impl MemoryItemStore {
    /// Create an uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the dataset has been populated.
    pub fn is_initialized(&self) -> bool {
        self.items.initialized()
    }

    async fn dataset(&self) -> &Vec<i64> {
        self.items
            .get_or_init(|| async {
                debug!("Populating in-memory item store");
                DEFAULT_ITEMS.to_vec()
            })
            .await
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn init(&self) -> AppResult<()> {
        self.dataset().await;
        Ok(())
    }

    async fn items(&self) -> AppResult<Vec<i64>> {
        Ok(self.dataset().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_items_initializes_lazily() {
        let store = MemoryItemStore::new();
        assert!(!store.is_initialized());
        assert_eq!(store.items().await.unwrap(), vec![1, 2, 3, 4, 5]);
        assert!(store.is_initialized());
    }

    #[tokio::test]
    async fn test_init_twice_does_not_duplicate() {
        let store = MemoryItemStore::new();
        store.init().await.unwrap();
        store.init().await.unwrap();
        assert_eq!(store.items().await.unwrap().len(), DEFAULT_ITEMS.len());
    }
}
