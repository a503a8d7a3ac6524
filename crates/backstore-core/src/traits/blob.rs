//! Blob store trait for pluggable object storage backends.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// User-defined key/value metadata attached to a blob.
pub type BlobMetadata = HashMap<String, String>;

/// Trait for blob storage backends.
///
/// Blobs are addressed by a `(container, name)` pair. Uploading to an
/// existing pair replaces both payload and metadata.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Name of the active implementation, for status reporting.
    fn provider_name(&self) -> &'static str;

    /// Create the container if needed, then write the payload and metadata.
    ///
    /// Container creation is not rolled back if the write fails.
    async fn upload(
        &self,
        container: &str,
        name: &str,
        metadata: BlobMetadata,
        payload: Bytes,
    ) -> AppResult<()>;

    /// Read the full payload of a blob into memory.
    async fn download(&self, container: &str, name: &str) -> AppResult<Bytes>;
}
