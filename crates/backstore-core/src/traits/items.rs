//! Item store trait for the relational capability.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for the item store.
///
/// An item store starts uninitialized. [`ItemStore::init`] provisions it
/// once; later calls are no-ops. [`ItemStore::items`] triggers
/// initialization lazily when nothing has called `init` yet.
#[async_trait]
pub trait ItemStore: Send + Sync + std::fmt::Debug + 'static {
    /// Name of the active implementation, for status reporting.
    fn provider_name(&self) -> &'static str;

    /// Provision and seed the store. Idempotent.
    async fn init(&self) -> AppResult<()>;

    /// Return every stored version value in the store's natural order.
    async fn items(&self) -> AppResult<Vec<i64>>;
}
