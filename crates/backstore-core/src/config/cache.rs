//! Networked cache configuration.

use serde::{Deserialize, Serialize};

/// Cache configuration.
///
/// The networked provider is used when `host` is non-empty; otherwise the
/// in-process fallback is selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache server host name. Empty selects the in-memory fallback.
    #[serde(default)]
    pub host: String,
    /// Cache server port (managed deployments listen on the TLS port).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Access key sent as the AUTH password.
    #[serde(default)]
    pub password: String,
    /// Whether to connect over TLS.
    #[serde(default = "default_use_tls")]
    pub use_tls: bool,
    /// Client name registered with `CLIENT SETNAME`.
    #[serde(default = "default_client_name")]
    pub client_name: String,
    /// Key namespace used by the HTTP layer's cache handle.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl CacheConfig {
    /// Whether a networked cache host has been configured.
    pub fn is_configured(&self) -> bool {
        !self.host.is_empty()
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
            password: String::new(),
            use_tls: default_use_tls(),
            client_name: default_client_name(),
            key_prefix: default_key_prefix(),
        }
    }
}

fn default_port() -> u16 {
    6380
}

fn default_use_tls() -> bool {
    true
}

fn default_client_name() -> String {
    "redis".to_string()
}

fn default_key_prefix() -> String {
    "counter:".to_string()
}
