//! Visit persistence
//!
//! One row per QR scan in `qr_visits`. The table is provisioned out of band:
//!
//! ```sql
//! CREATE TABLE qr_visits (
//!     source    TEXT      NOT NULL,
//!     timestamp TIMESTAMP NOT NULL,
//!     useragent TEXT      NOT NULL,
//!     pagepath  TEXT      NOT NULL
//! );
//! ```

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

use crate::config::DatabaseConfig;
use crate::models::VisitEvent;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("database call timed out after {0:?}")]
    Timeout(Duration),
}

/// Records visit events. Each call is a single independent insert.
#[async_trait]
pub trait VisitStore: Send + Sync {
    async fn record(&self, visit: &VisitEvent) -> Result<(), StoreError>;
}

const INSERT_VISIT: &str = r#"
    INSERT INTO qr_visits (source, timestamp, useragent, pagepath)
    VALUES ($1, $2, $3, $4)
"#;

/// Postgres-backed visit store
pub struct PgVisitStore {
    pool: PgPool,
    timeout: Duration,
}

impl PgVisitStore {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        tracing::info!(
            "Connecting to database {} at {}:{}",
            config.name,
            config.host,
            config.port
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.timeout)
            .connect(&config.url())
            .await?;

        Ok(Self::with_pool(pool, config.timeout))
    }

    pub fn with_pool(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Drain and close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

#[async_trait]
impl VisitStore for PgVisitStore {
    async fn record(&self, visit: &VisitEvent) -> Result<(), StoreError> {
        let insert = sqlx::query(INSERT_VISIT)
            .bind(&visit.source)
            .bind(visit.timestamp.naive_utc())
            .bind(&visit.user_agent)
            .bind(&visit.page_path)
            .execute(&self.pool);

        bounded(self.timeout, insert).await?;

        tracing::debug!(source = %visit.source, path = %visit.page_path, "Recorded QR visit");
        Ok(())
    }
}

/// Run a database call, giving up after `limit`
async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| StoreError::Timeout(limit))?
        .map_err(StoreError::from)
}
