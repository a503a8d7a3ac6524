//! PostgreSQL item store.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Timelike, Utc};
use tokio::sync::OnceCell;
use tracing::{error, info};

use backstore_core::error::{AppError, ErrorKind};
use backstore_core::result::AppResult;
use backstore_core::traits::items::ItemStore;

use crate::connection::DatabaseConnector;

/// Provider name reported by the PostgreSQL item store.
pub const PROVIDER_NAME: &str = "postgres";

const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS items (id BIGSERIAL PRIMARY KEY, version BIGINT NOT NULL)";
const COUNT_ROWS: &str = "SELECT COUNT(*) FROM items";
const INSERT_SEED: &str = "INSERT INTO items (version) VALUES ($1)";
const SELECT_VERSIONS: &str = "SELECT version FROM items ORDER BY id";

/// Item store backed by a PostgreSQL `items` table.
///
/// Provisioning creates the table if needed and seeds a single row when it
/// is empty. It runs at most once per instance; a failed attempt leaves the
/// store uninitialized so the next call retries.
#[derive(Debug)]
pub struct PgItemStore {
    connector: DatabaseConnector,
    initialized: OnceCell<()>,
}

impl PgItemStore {
    /// Create a store. No connection is opened until first use.
    pub fn new(connector: DatabaseConnector) -> Self {
        Self {
            connector,
            initialized: OnceCell::new(),
        }
    }

    /// Whether provisioning has completed.
    pub fn is_initialized(&self) -> bool {
        self.initialized.initialized()
    }

    async fn provision(&self) -> AppResult<()> {
        info!(target_db = %self.connector.target(), "Provisioning items table");

        let mut conn = self.connector.connect().await?;
        let created = sqlx::query(CREATE_TABLE).execute(&mut conn).await;
        self.connector.close(conn).await;
        created.map_err(|e| self.query_error("create table", CREATE_TABLE, e))?;

        let mut conn = self.connector.connect().await?;
        let count = sqlx::query_scalar::<_, i64>(COUNT_ROWS)
            .fetch_one(&mut conn)
            .await;
        self.connector.close(conn).await;
        let count = count.map_err(|e| self.query_error("count rows", COUNT_ROWS, e))?;

        if count == 0 {
            let version = seed_version(Utc::now());
            let mut conn = self.connector.connect().await?;
            let inserted = sqlx::query(INSERT_SEED)
                .bind(version)
                .execute(&mut conn)
                .await;
            self.connector.close(conn).await;
            inserted.map_err(|e| self.query_error("seed", INSERT_SEED, e))?;
            info!(version, "Seeded items table");
        }

        Ok(())
    }

    async fn fetch_versions(&self) -> AppResult<Vec<i64>> {
        let mut conn = self.connector.connect().await?;
        let rows = sqlx::query_scalar::<_, i64>(SELECT_VERSIONS)
            .fetch_all(&mut conn)
            .await;
        self.connector.close(conn).await;
        rows.map_err(|e| self.query_error("select versions", SELECT_VERSIONS, e))
    }

    fn query_error(&self, op: &str, sql: &str, e: sqlx::Error) -> AppError {
        AppError::with_source(
            ErrorKind::Database,
            format!("Item store {op} failed on {} ({sql}): {e}", self.connector.target()),
            e,
        )
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn init(&self) -> AppResult<()> {
        self.initialized
            .get_or_try_init(|| self.provision())
            .await
            .map(|_| ())
    }

    /// Database failures are logged and yield an empty list.
    async fn items(&self) -> AppResult<Vec<i64>> {
        if let Err(e) = self.init().await {
            error!(op = "init", error = %e, "Item store initialization failed");
            return Ok(Vec::new());
        }

        match self.fetch_versions().await {
            Ok(versions) => Ok(versions),
            Err(e) => {
                error!(op = "items", error = %e, "Item query failed");
                Ok(Vec::new())
            }
        }
    }
}

/// Encode a timestamp as `YYYYMMDDhhmmssSSS`.
///
/// Later timestamps always produce larger values, and the digits read back
/// as the calendar date and time.
pub fn seed_version(now: DateTime<Utc>) -> i64 {
    let millis = i64::from(now.timestamp_subsec_millis().min(999));
    i64::from(now.year()) * 10_000_000_000_000
        + i64::from(now.month()) * 100_000_000_000
        + i64::from(now.day()) * 1_000_000_000
        + i64::from(now.hour()) * 10_000_000
        + i64::from(now.minute()) * 100_000
        + i64::from(now.second()) * 1_000
        + millis
}
