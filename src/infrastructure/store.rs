//! 存储抽象
//!
//! 处理器与服务层只通过 [`RecordStore`] 访问数据，每个操作对应一条参数化语句。

use async_trait::async_trait;
use serde_json::{Map, Value};

/// 一行记录：列名 -> 值
pub type Row = Map<String, Value>;

/// 写入存储的字段集合：列名 -> 值
pub type Fields = Map<String, Value>;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("cannot encode fields: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("malformed row returned from table '{table}'")]
    MalformedRow { table: &'static str },
}

/// 记录存储接口
///
/// `table` 与 `fields` 的列名只来自静态的记录类型元数据，`id` 是客户端提供的不透明标识。
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// 返回表中的全部记录，顺序不保证
    async fn list(&self, table: &'static str) -> Result<Vec<Row>, StoreError>;

    /// 按标识查找单条记录
    async fn fetch(&self, table: &'static str, id: &str) -> Result<Option<Row>, StoreError>;

    /// 插入新记录，返回带有存储分配标识的完整记录
    async fn insert(&self, table: &'static str, fields: Fields) -> Result<Row, StoreError>;

    /// 整体覆盖记录的字段；记录不存在时返回 `None`
    async fn update(
        &self,
        table: &'static str,
        id: &str,
        fields: Fields,
    ) -> Result<Option<Row>, StoreError>;

    /// 删除记录；返回是否确实删除了一行
    async fn delete(&self, table: &'static str, id: &str) -> Result<bool, StoreError>;

    /// 连通性检查
    async fn ping(&self) -> Result<(), StoreError>;
}

/// 把 `row_to_json` 的结果转换为 [`Row`]
pub(crate) fn into_row(table: &'static str, value: Value) -> Result<Row, StoreError> {
    match value {
        Value::Object(row) => Ok(row),
        _ => Err(StoreError::MalformedRow { table }),
    }
}
