//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and `BACKSTORE__`-prefixed environment variables.
//! Each sub-module represents a logical configuration section.
//!
//! Provider selection is driven by what is present here: every capability
//! section exposes an `is_configured` check that the factories consult.

pub mod app;
pub mod blob;
pub mod cache;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::blob::BlobConfig;
use self::cache::CacheConfig;
use self::database::DatabaseConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Networked cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Object storage settings.
    #[serde(default)]
    pub blob: BlobConfig,
    /// Relational database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default.toml` with an environment-specific overlay
    /// (`config/{env}.toml`) and environment variables prefixed with
    /// `BACKSTORE` (e.g. `BACKSTORE__CACHE__HOST`). Every file is optional.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_with_vars(env, None)
    }

    /// Load configuration, reading `BACKSTORE__*` variables from `vars`
    /// instead of the process environment when given.
    ///
    /// Values are not eagerly parsed: numeric and boolean fields are
    /// converted during deserialization, string fields keep their text.
    fn load_with_vars(
        env: &str,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("BACKSTORE")
                    .separator("__")
                    .source(vars),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an inline TOML document.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_selects_every_fallback() {
        let config = AppConfig::from_toml("").unwrap();
        assert!(!config.cache.is_configured());
        assert!(!config.blob.is_configured());
        assert!(!config.database.is_configured());
        assert_eq!(config.server.port, 80);
    }

    #[test]
    fn test_cache_defaults() {
        let config = AppConfig::from_toml("[cache]\nhost = \"cache.internal\"").unwrap();
        assert!(config.cache.is_configured());
        assert_eq!(config.cache.port, 6380);
        assert!(config.cache.use_tls);
        assert_eq!(config.cache.client_name, "redis");
        assert_eq!(config.cache.key_prefix, "counter:");
    }

    #[test]
    fn test_empty_cache_host_is_not_configured() {
        let config = AppConfig::from_toml("[cache]\nhost = \"\"").unwrap();
        assert!(!config.cache.is_configured());
    }

    #[test]
    fn test_empty_connection_string_is_not_configured() {
        let config = AppConfig::from_toml("[blob]\nconnection_string = \"\"").unwrap();
        assert!(!config.blob.is_configured());
        assert_eq!(config.blob.container, "attachments");
        assert_eq!(config.blob.blob_name, "my-blob");
    }

    #[test]
    fn test_present_but_empty_database_host_is_configured() {
        let config = AppConfig::from_toml("[database]\nhost = \"\"").unwrap();
        assert!(config.database.is_configured());
        assert_eq!(config.database.port, 5432);
        assert!(!config.database.skip_ssl);
    }

    fn env_vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_env_password_keeps_its_text() {
        let vars = env_vars(&[
            ("BACKSTORE__CACHE__PASSWORD", "0123"),
            ("BACKSTORE__DATABASE__PASSWORD", "1e5"),
        ]);
        let config = AppConfig::load_with_vars("none", Some(vars)).unwrap();
        assert_eq!(config.cache.password, "0123");
        assert_eq!(config.database.password, "1e5");
    }

    #[test]
    fn test_env_numbers_and_flags_are_converted() {
        let vars = env_vars(&[
            ("BACKSTORE__CACHE__HOST", "cache.internal"),
            ("BACKSTORE__CACHE__PORT", "6390"),
            ("BACKSTORE__CACHE__USE_TLS", "false"),
            ("BACKSTORE__DATABASE__SKIP_SSL", "true"),
        ]);
        let config = AppConfig::load_with_vars("none", Some(vars)).unwrap();
        assert!(config.cache.is_configured());
        assert_eq!(config.cache.port, 6390);
        assert!(!config.cache.use_tls);
        assert!(config.database.skip_ssl);
    }

    #[test]
    fn test_env_empty_database_host_is_configured() {
        let vars = env_vars(&[("BACKSTORE__DATABASE__HOST", "")]);
        let config = AppConfig::load_with_vars("none", Some(vars)).unwrap();
        assert_eq!(config.database.host.as_deref(), Some(""));
        assert!(config.database.is_configured());
    }
}
