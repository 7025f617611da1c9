//! 核心服务层模块
//!
//! 一组对所有记录类型通用的操作：校验、调用存储、投影结果。

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use super::{
    error::AppError,
    kind::{Operation, RecordKind},
};
use crate::infrastructure::{Fields, RecordStore, StoreError};

#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn RecordStore>,
}

impl RecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list<K: RecordKind>(&self) -> Result<Vec<Value>, AppError> {
        let rows = self
            .store
            .list(K::TABLE)
            .await
            .map_err(|e| store_error::<K>(Operation::List, e))?;

        Ok(rows.into_iter().map(K::project).collect())
    }

    pub async fn get<K: RecordKind>(&self, id: &str) -> Result<Value, AppError> {
        self.store
            .fetch(K::TABLE, id)
            .await
            .map_err(|e| store_error::<K>(Operation::Get, e))?
            .map(K::project)
            .ok_or(AppError::NotFound(K::MESSAGES.not_found))
    }

    /// 校验必填字段后插入；校验失败时不会访问存储
    pub async fn create<K: RecordKind>(&self, payload: K::Payload) -> Result<Value, AppError> {
        if let Err(errors) = payload.validate() {
            debug!(table = K::TABLE, %errors, "rejected payload");
            return Err(AppError::Validation(K::MESSAGES.invalid));
        }

        let row = self
            .store
            .insert(K::TABLE, to_fields::<K>(&payload, Operation::Create)?)
            .await
            .map_err(|e| store_error::<K>(Operation::Create, e))?;

        let id = row.get("id").cloned().unwrap_or_default();
        info!(table = K::TABLE, id = %id, "record created");
        Ok(K::project_created(row))
    }

    /// 整体覆盖：未提交的字段写为 null
    pub async fn update<K: RecordKind>(
        &self,
        id: &str,
        payload: K::Payload,
    ) -> Result<Value, AppError> {
        let row = self
            .store
            .update(K::TABLE, id, to_fields::<K>(&payload, Operation::Update)?)
            .await
            .map_err(|e| store_error::<K>(Operation::Update, e))?
            .ok_or(AppError::NotFound(K::MESSAGES.not_found))?;

        info!(table = K::TABLE, id, "record updated");
        Ok(K::project(row))
    }

    pub async fn delete<K: RecordKind>(&self, id: &str) -> Result<(), AppError> {
        let deleted = self
            .store
            .delete(K::TABLE, id)
            .await
            .map_err(|e| store_error::<K>(Operation::Delete, e))?;

        if !deleted {
            return Err(AppError::NotFound(K::MESSAGES.not_found));
        }

        info!(table = K::TABLE, id, "record deleted");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}

fn store_error<K: RecordKind>(operation: Operation, source: StoreError) -> AppError {
    AppError::Store {
        message: operation.failure_message(&K::MESSAGES),
        operation,
        table: K::TABLE,
        source,
    }
}

/// 把载荷按 `K::COLUMNS` 转成存储字段，缺失的列写为 null
fn to_fields<K: RecordKind>(
    payload: &K::Payload,
    operation: Operation,
) -> Result<Fields, AppError> {
    let serialized = serde_json::to_value(payload)
        .map_err(|e| store_error::<K>(operation, StoreError::Encode(e)))?;

    let mut source = match serialized {
        Value::Object(map) => map,
        _ => Fields::new(),
    };

    Ok(K::COLUMNS
        .iter()
        .map(|column| {
            let value = source.remove(*column).unwrap_or(Value::Null);
            (column.to_string(), value)
        })
        .collect())
}
