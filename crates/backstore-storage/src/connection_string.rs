//! Object storage connection string parsing.
//!
//! A connection string is a list of `Key=Value` segments separated by `;`:
//!
//! ```text
//! Endpoint=http://minio:9000;Region=eu-west-1;AccessKeyId=...;SecretAccessKey=...;ForcePathStyle=true
//! ```
//!
//! Keys are case-insensitive and empty segments are skipped. Values may
//! themselves contain `=`; only the first one splits key from value.

use backstore_core::error::AppError;
use backstore_core::result::AppResult;

/// Region used when the connection string does not name one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Static access key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey {
    /// Access key ID.
    pub id: String,
    /// Secret access key.
    pub secret: String,
}

impl std::fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessKey")
            .field("id", &self.id)
            .field("secret", &"****")
            .finish()
    }
}

/// Parsed object storage settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Custom endpoint URL (MinIO, Azurite-compatible gateways, etc.).
    pub endpoint: Option<String>,
    /// Signing region.
    pub region: String,
    /// Explicit credentials. `None` uses the ambient AWS credential chain.
    pub access_key: Option<AccessKey>,
    /// Use path-style addressing (`endpoint/bucket/key`).
    pub force_path_style: bool,
}

impl ConnectionSettings {
    /// Parse a connection string.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let mut endpoint = None;
        let mut region = None;
        let mut key_id = None;
        let mut secret = None;
        let mut force_path_style = false;

        for segment in raw.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, value) = segment.split_once('=').ok_or_else(|| {
                AppError::configuration(format!(
                    "Malformed connection string segment '{}': expected Key=Value",
                    redact_segment(segment)
                ))
            })?;
            let value = value.trim();

            match key.trim().to_ascii_lowercase().as_str() {
                "endpoint" => endpoint = Some(normalize_endpoint(value)),
                "region" => region = Some(value.to_string()),
                "accesskeyid" => key_id = Some(value.to_string()),
                "secretaccesskey" => secret = Some(value.to_string()),
                "forcepathstyle" => {
                    force_path_style = value.parse::<bool>().map_err(|_| {
                        AppError::configuration(format!(
                            "ForcePathStyle must be 'true' or 'false', got '{value}'"
                        ))
                    })?;
                }
                other => {
                    return Err(AppError::configuration(format!(
                        "Unknown connection string key '{other}'"
                    )));
                }
            }
        }

        let access_key = match (key_id, secret) {
            (Some(id), Some(secret)) => Some(AccessKey { id, secret }),
            (None, None) => None,
            _ => {
                return Err(AppError::configuration(
                    "Connection string requires both AccessKeyId and SecretAccessKey when either is set",
                ));
            }
        };

        Ok(Self {
            endpoint,
            region: region
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            access_key,
            force_path_style,
        })
    }
}

/// Prepend `http://` to bare `host:port` endpoints.
fn normalize_endpoint(endpoint: &str) -> String {
    let lower = endpoint.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{endpoint}")
    }
}

/// Keep secrets out of error messages.
fn redact_segment(segment: &str) -> String {
    if segment.chars().count() > 12 {
        format!("{}...", segment.chars().take(8).collect::<String>())
    } else {
        segment.to_string()
    }
}
