//! Item manager that dispatches to the configured item store.

use std::sync::Arc;

use tracing::info;

use backstore_core::config::database::DatabaseConfig;
use backstore_core::result::AppResult;
use backstore_core::traits::items::ItemStore;

use crate::connection::DatabaseConnector;
use crate::repositories::{MemoryItemStore, PgItemStore};

/// Item manager that wraps the selected item store.
#[derive(Debug, Clone)]
pub struct ItemManager {
    inner: Arc<dyn ItemStore>,
}

impl ItemManager {
    /// Create an item manager from configuration.
    ///
    /// Any `host` setting, even an empty one, selects PostgreSQL. No
    /// connection is opened until the first call.
    pub fn new(config: &DatabaseConfig) -> Self {
        let inner: Arc<dyn ItemStore> = if config.is_configured() {
            info!(
                host = config.host.as_deref().unwrap_or_default(),
                port = config.port,
                database = %config.database,
                "Initializing PostgreSQL item store"
            );
            Arc::new(PgItemStore::new(DatabaseConnector::new(config)))
        } else {
            info!("Initializing in-memory item store");
            Arc::new(MemoryItemStore::new())
        };

        info!(provider = inner.provider_name(), "Item store selected");
        Self { inner }
    }

    /// Create an item manager from an existing store (for testing).
    pub fn from_store(store: Arc<dyn ItemStore>) -> Self {
        Self { inner: store }
    }

    /// Name of the active store.
    pub fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    /// Provision the store. Idempotent.
    pub async fn init(&self) -> AppResult<()> {
        self.inner.init().await
    }

    /// All stored versions, provisioning first if needed.
    pub async fn items(&self) -> AppResult<Vec<i64>> {
        self.inner.items().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_absent_host_selects_memory() {
        let items = ItemManager::new(&DatabaseConfig::default());
        assert_eq!(items.provider_name(), "memory");
        assert_eq!(items.items().await.unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_host_selects_postgres() {
        let config = DatabaseConfig {
            host: Some(String::new()),
            ..DatabaseConfig::default()
        };
        assert_eq!(ItemManager::new(&config).provider_name(), "postgres");
    }
}
