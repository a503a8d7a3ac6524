//! Blob manager that dispatches to the configured blob store.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use backstore_core::config::blob::BlobConfig;
use backstore_core::error::AppError;
use backstore_core::result::AppResult;
use backstore_core::traits::blob::{BlobMetadata, BlobStore};

/// Blob manager that wraps the selected blob store.
///
/// The store is chosen once at construction time and kept for the life of
/// the process.
#[derive(Debug, Clone)]
pub struct BlobManager {
    inner: Arc<dyn BlobStore>,
}

impl BlobManager {
    /// Create a blob manager from configuration.
    ///
    /// A non-empty connection string selects S3; a malformed one is an error.
    /// Without one the in-memory fallback is used.
    pub async fn new(config: &BlobConfig) -> AppResult<Self> {
        let inner: Arc<dyn BlobStore> = if config.is_configured() {
            Self::object_storage(config).await?
        } else {
            Self::fallback()?
        };

        info!(provider = inner.provider_name(), "Blob store selected");
        Ok(Self { inner })
    }

    #[cfg(feature = "s3")]
    async fn object_storage(config: &BlobConfig) -> AppResult<Arc<dyn BlobStore>> {
        let settings = crate::connection_string::ConnectionSettings::parse(&config.connection_string)?;
        let store = crate::providers::s3::S3BlobStore::new(&settings).await?;
        Ok(Arc::new(store))
    }

    #[cfg(not(feature = "s3"))]
    async fn object_storage(_config: &BlobConfig) -> AppResult<Arc<dyn BlobStore>> {
        Err(AppError::configuration(
            "A blob connection string is configured but the s3 feature is disabled",
        ))
    }

    #[cfg(feature = "memory")]
    fn fallback() -> AppResult<Arc<dyn BlobStore>> {
        info!("Initializing in-memory blob store");
        Ok(Arc::new(crate::providers::memory::MemoryBlobStore::new()))
    }

    #[cfg(not(feature = "memory"))]
    fn fallback() -> AppResult<Arc<dyn BlobStore>> {
        Err(AppError::configuration(
            "No blob connection string configured and the memory feature is disabled",
        ))
    }

    /// Create a blob manager from an existing store (for testing).
    pub fn from_store(store: Arc<dyn BlobStore>) -> Self {
        Self { inner: store }
    }

    /// Name of the active store.
    pub fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    /// Upload a payload, creating the container if needed.
    pub async fn upload(
        &self,
        container: &str,
        name: &str,
        metadata: BlobMetadata,
        payload: Bytes,
    ) -> AppResult<()> {
        if container.is_empty() || name.is_empty() {
            return Err(AppError::validation("Container and blob name must not be empty"));
        }
        self.inner.upload(container, name, metadata, payload).await
    }

    /// Download a full payload into memory.
    pub async fn download(&self, container: &str, name: &str) -> AppResult<Bytes> {
        self.inner.download(container, name).await
    }
}

#[cfg(all(test, feature = "memory"))]
mod tests {
    use super::*;
    use backstore_core::error::ErrorKind;

    #[tokio::test]
    async fn test_unconfigured_selects_memory() {
        let blobs = BlobManager::new(&BlobConfig::default()).await.unwrap();
        assert_eq!(blobs.provider_name(), "memory");
    }

    #[cfg(feature = "s3")]
    #[tokio::test]
    async fn test_connection_string_selects_s3() {
        let config = BlobConfig {
            connection_string: "Endpoint=localhost:9000;AccessKeyId=a;SecretAccessKey=b".into(),
            ..BlobConfig::default()
        };
        let blobs = BlobManager::new(&config).await.unwrap();
        assert_eq!(blobs.provider_name(), "s3");
    }

    #[tokio::test]
    async fn test_malformed_connection_string_fails_fast() {
        let config = BlobConfig {
            connection_string: "garbage".into(),
            ..BlobConfig::default()
        };
        let err = BlobManager::new(&config).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn test_fallback_roundtrip() {
        let blobs = BlobManager::new(&BlobConfig::default()).await.unwrap();
        blobs
            .upload("c", "b", BlobMetadata::new(), Bytes::from_static(b"hi"))
            .await
            .unwrap();
        assert_eq!(blobs.download("c", "b").await.unwrap(), Bytes::from_static(b"hi"));
        assert!(blobs.download("c", "other").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_names_rejected() {
        let blobs = BlobManager::new(&BlobConfig::default()).await.unwrap();
        let err = blobs
            .upload("", "b", BlobMetadata::new(), Bytes::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
