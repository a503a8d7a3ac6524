//! Object storage configuration.

use serde::{Deserialize, Serialize};

/// Blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobConfig {
    /// Object storage connection string. Empty selects the in-memory fallback.
    ///
    /// Format: `Endpoint=...;Region=...;AccessKeyId=...;SecretAccessKey=...;ForcePathStyle=true`
    #[serde(default)]
    pub connection_string: String,
    /// Container (bucket) used by the HTTP layer.
    #[serde(default = "default_container")]
    pub container: String,
    /// Blob name used by the HTTP layer.
    #[serde(default = "default_blob_name")]
    pub blob_name: String,
}

impl BlobConfig {
    /// Whether an object storage connection string has been configured.
    pub fn is_configured(&self) -> bool {
        !self.connection_string.is_empty()
    }
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            connection_string: String::new(),
            container: default_container(),
            blob_name: default_blob_name(),
        }
    }
}

fn default_container() -> String {
    "attachments".to_string()
}

fn default_blob_name() -> String {
    "my-blob".to_string()
}
