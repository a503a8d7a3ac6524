//! Database configuration.

use serde::{Deserialize, Serialize};

/// PostgreSQL connection configuration.
///
/// Unlike the cache and blob sections, the relational provider is selected
/// as soon as `host` is present, even when it is an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database host. `None` selects the in-memory fallback.
    #[serde(default)]
    pub host: Option<String>,
    /// Database port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Login role.
    #[serde(default)]
    pub user: String,
    /// Login password.
    #[serde(default)]
    pub password: String,
    /// Database name.
    #[serde(default = "default_database")]
    pub database: String,
    /// Connect without TLS.
    #[serde(default)]
    pub skip_ssl: bool,
}

impl DatabaseConfig {
    /// Whether a database host setting is present at all.
    pub fn is_configured(&self) -> bool {
        self.host.is_some()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: default_port(),
            user: String::new(),
            password: String::new(),
            database: default_database(),
            skip_ssl: false,
        }
    }
}

fn default_port() -> u16 {
    5432
}

fn default_database() -> String {
    "postgres".to_string()
}
