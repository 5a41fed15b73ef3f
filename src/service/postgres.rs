use async_trait::async_trait;
use log::info;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::conf::{DatabaseConfig, PoolConfig};
use crate::core::{FnProxyError, Record, TestDataParams};

use super::decode::row_to_record;
use super::{QUERY, TestDataSource};

/// Runs the fixed query against a Postgres pool.
pub struct PgSource {
    pool: PgPool,
}

impl PgSource {
    /// Connects eagerly, so an unreachable database fails startup.
    pub async fn connect(db: &DatabaseConfig, conf: &PoolConfig) -> Result<Self, FnProxyError> {
        info!("connecting to {db}");
        let pool = PgPoolOptions::new()
            .max_connections(conf.max_connections)
            .min_connections(conf.min_connections.min(conf.max_connections))
            .acquire_timeout(conf.acquire_timeout)
            .connect_with(db.connect_options())
            .await?;
        info!(
            "pool ready, max_connections={}, min_connections={}",
            conf.max_connections, conf.min_connections
        );
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TestDataSource for PgSource {
    async fn fetch(&self, params: &TestDataParams) -> Result<Vec<Record>, FnProxyError> {
        // Returned to the pool on drop, whichever way this function exits.
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query(QUERY.as_str())
            .bind(params.records.as_str())
            .bind(&params.text_param)
            .bind(params.int_param.as_str())
            .bind(&params.ts_param)
            .bind(params.bool_param)
            .fetch_all(&mut *conn)
            .await?;

        rows.iter().map(row_to_record).collect()
    }

    async fn close(&self) {
        info!("closing database pool");
        self.pool.close().await;
    }
}
