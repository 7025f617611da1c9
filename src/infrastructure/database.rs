//! 数据库基础设施

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

use super::store::{into_row, Fields, RecordStore, Row, StoreError};
use crate::config::DatabaseConfig;

/// 进程内唯一的连接池，启动时获取，关闭时显式释放
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        info!("Conectado ao banco de dados PostgreSQL");
        Ok(Self { pool })
    }

    pub fn store(&self) -> PgStore {
        PgStore::new(self.pool.clone())
    }

    /// 等待所有连接归还后关闭连接池
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// 基于 PostgreSQL 的记录存储
///
/// 字段以一个 JSONB 参数绑定，再由 `jsonb_populate_record` 按表的列类型展开；
/// 结果行统一经 `row_to_json` 返回。标识按文本比较，兼容 serial 与 uuid 主键。
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn column_list(fields: &Fields) -> String {
    fields.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[async_trait]
impl RecordStore for PgStore {
    async fn list(&self, table: &'static str) -> Result<Vec<Row>, StoreError> {
        let sql = format!("SELECT row_to_json(t) FROM {table} t");
        let rows: Vec<Value> = sqlx::query_scalar(&sql).fetch_all(&self.pool).await?;

        rows.into_iter().map(|row| into_row(table, row)).collect()
    }

    async fn fetch(&self, table: &'static str, id: &str) -> Result<Option<Row>, StoreError> {
        let sql = format!("SELECT row_to_json(t) FROM {table} t WHERE t.id::text = $1");
        let row: Option<Value> = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| into_row(table, row)).transpose()
    }

    async fn insert(&self, table: &'static str, fields: Fields) -> Result<Row, StoreError> {
        let columns = column_list(&fields);
        let sql = format!(
            r#"
            WITH inserted AS (
                INSERT INTO {table} ({columns})
                SELECT {columns} FROM jsonb_populate_record(NULL::{table}, $1)
                RETURNING *
            )
            SELECT row_to_json(inserted) FROM inserted
            "#
        );
        let row: Value = sqlx::query_scalar(&sql)
            .bind(Value::Object(fields))
            .fetch_one(&self.pool)
            .await?;

        into_row(table, row)
    }

    async fn update(
        &self,
        table: &'static str,
        id: &str,
        fields: Fields,
    ) -> Result<Option<Row>, StoreError> {
        let columns = column_list(&fields);
        let sql = format!(
            r#"
            WITH updated AS (
                UPDATE {table} AS t
                SET ({columns}) = (
                    SELECT {columns} FROM jsonb_populate_record(NULL::{table}, $1)
                )
                WHERE t.id::text = $2
                RETURNING t.*
            )
            SELECT row_to_json(updated) FROM updated
            "#
        );
        let row: Option<Value> = sqlx::query_scalar(&sql)
            .bind(Value::Object(fields))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| into_row(table, row)).transpose()
    }

    async fn delete(&self, table: &'static str, id: &str) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {table} WHERE id::text = $1");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
