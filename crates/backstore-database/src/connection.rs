//! Per-query PostgreSQL connections.

use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgSslMode};
use tracing::{debug, warn};

use backstore_core::config::database::DatabaseConfig;
use backstore_core::error::{AppError, ErrorKind};
use backstore_core::result::AppResult;

/// Opens short-lived connections from a fixed set of connect options.
#[derive(Debug, Clone)]
pub struct DatabaseConnector {
    options: PgConnectOptions,
    /// `host:port/database` for log context, without credentials.
    target: String,
}

impl DatabaseConnector {
    /// Build connect options from configuration. Nothing is dialed here.
    pub fn new(config: &DatabaseConfig) -> Self {
        let host = config.host.clone().unwrap_or_default();
        let options = PgConnectOptions::new()
            .host(&host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database)
            .ssl_mode(ssl_mode(config.skip_ssl));

        Self {
            options,
            target: format!("{host}:{}/{}", config.port, config.database),
        }
    }

    /// Connection target for log context.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Open a new connection.
    pub async fn connect(&self) -> AppResult<PgConnection> {
        debug!(target_db = %self.target, "Opening database connection");
        PgConnection::connect_with(&self.options).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to database at {}: {e}", self.target),
                e,
            )
        })
    }

    /// Close a connection, logging (but not returning) close failures.
    pub async fn close(&self, conn: PgConnection) {
        if let Err(e) = conn.close().await {
            warn!(target_db = %self.target, error = %e, "Failed to close database connection");
        }
    }
}

/// TLS mode for the configured skip flag.
fn ssl_mode(skip_ssl: bool) -> PgSslMode {
    if skip_ssl {
        PgSslMode::Disable
    } else {
        PgSslMode::Require
    }
}
