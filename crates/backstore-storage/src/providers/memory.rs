//! In-process fallback blob store.

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use tracing::debug;

use backstore_core::result::AppResult;
use backstore_core::traits::blob::{BlobMetadata, BlobStore};

/// Provider name reported by the fallback blob store.
pub const PROVIDER_NAME: &str = "memory";

/// A stored blob payload with its metadata.
#[derive(Debug, Clone)]
struct StoredBlob {
    payload: Bytes,
    metadata: BlobMetadata,
}

/// In-memory blob store keyed by `(container, name)`.
///
/// Containers are implicit. Downloading an unknown blob returns an empty
/// buffer instead of failing.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: DashMap<(String, String), StoredBlob>,
}

impl MemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn upload(
        &self,
        container: &str,
        name: &str,
        metadata: BlobMetadata,
        payload: Bytes,
    ) -> AppResult<()> {
        debug!(container, name, size = payload.len(), "Storing in-memory blob");
        self.blobs.insert(
            (container.to_string(), name.to_string()),
            StoredBlob { payload, metadata },
        );
        Ok(())
    }

    async fn download(&self, container: &str, name: &str) -> AppResult<Bytes> {
        let payload = self
            .blobs
            .get(&(container.to_string(), name.to_string()))
            .map(|entry| {
                debug!(
                    container,
                    name,
                    metadata_keys = entry.metadata.len(),
                    "Reading in-memory blob"
                );
                entry.payload.clone()
            })
            .unwrap_or_default();
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl MemoryBlobStore {
        fn metadata(&self, container: &str, name: &str) -> Option<BlobMetadata> {
            self.blobs
                .get(&(container.to_string(), name.to_string()))
                .map(|entry| entry.metadata.clone())
        }

        fn len(&self) -> usize {
            self.blobs.len()
        }
    }

    #[tokio::test]
    async fn test_upload_download() {
        let store = MemoryBlobStore::new();
        store
            .upload("c", "b", BlobMetadata::new(), Bytes::from_static(b"hi"))
            .await
            .unwrap();
        assert_eq!(store.download("c", "b").await.unwrap(), Bytes::from_static(b"hi"));
    }

    #[tokio::test]
    async fn test_overwrite_replaces_payload_and_metadata() {
        let store = MemoryBlobStore::new();
        let first = BlobMetadata::from([("kind".to_string(), "a".to_string())]);
        let second = BlobMetadata::from([("owner".to_string(), "b".to_string())]);

        store.upload("c", "b", first, Bytes::from_static(b"A")).await.unwrap();
        store.upload("c", "b", second.clone(), Bytes::from_static(b"B")).await.unwrap();

        assert_eq!(store.download("c", "b").await.unwrap(), Bytes::from_static(b"B"));
        assert_eq!(store.metadata("c", "b"), Some(second));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_blob_is_empty() {
        let store = MemoryBlobStore::new();
        let data = store.download("c", "missing").await.unwrap();
        assert!(data.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_containers_are_separate() {
        let store = MemoryBlobStore::new();
        store
            .upload("one", "b", BlobMetadata::new(), Bytes::from_static(b"1"))
            .await
            .unwrap();
        assert!(store.download("two", "b").await.unwrap().is_empty());
    }
}
