//! 内存存储
//!
//! 不持久化的 [`RecordStore`] 实现，选中时即为唯一的数据来源。
//! 用于无数据库的本地运行和 HTTP 测试。

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use super::store::{Fields, RecordStore, Row, StoreError};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Row>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<&'static str, Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接写入一行（不经过字段映射），用于准备数据
    pub async fn seed(&self, table: &'static str, row: Row) -> i64 {
        let mut tables = self.tables.write().await;
        let table = tables.entry(table).or_default();
        table.next_id += 1;
        let id = table.next_id;

        let mut stored = row;
        stored.insert("id".to_string(), Value::from(id));
        table.rows.insert(id, stored);
        id
    }
}

/// 标识不是整数时视为不存在
fn parse_id(id: &str) -> Option<i64> {
    id.trim().parse().ok()
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self, table: &'static str) -> Result<Vec<Row>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(table)
            .map(|t| t.rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn fetch(&self, table: &'static str, id: &str) -> Result<Option<Row>, StoreError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let tables = self.tables.read().await;
        Ok(tables.get(table).and_then(|t| t.rows.get(&id)).cloned())
    }

    async fn insert(&self, table: &'static str, fields: Fields) -> Result<Row, StoreError> {
        let mut tables = self.tables.write().await;
        let table = tables.entry(table).or_default();
        table.next_id += 1;
        let id = table.next_id;

        let mut row = Row::new();
        row.insert("id".to_string(), Value::from(id));
        row.extend(fields);
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        table: &'static str,
        id: &str,
        fields: Fields,
    ) -> Result<Option<Row>, StoreError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let mut tables = self.tables.write().await;
        let Some(row) = tables.get_mut(table).and_then(|t| t.rows.get_mut(&id)) else {
            return Ok(None);
        };

        row.extend(fields);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, table: &'static str, id: &str) -> Result<bool, StoreError> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };
        let mut tables = self.tables.write().await;
        Ok(tables
            .get_mut(table)
            .map(|t| t.rows.remove(&id).is_some())
            .unwrap_or(false))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_per_table() {
        let store = MemoryStore::new();

        let a = store
            .insert("produto", fields(json!({"name": "A"})))
            .await
            .unwrap();
        let b = store
            .insert("produto", fields(json!({"name": "B"})))
            .await
            .unwrap();
        let c = store
            .insert("categoria", fields(json!({"category": "C"})))
            .await
            .unwrap();

        assert_eq!(a["id"], 1);
        assert_eq!(b["id"], 2);
        assert_eq!(c["id"], 1);
    }

    #[tokio::test]
    async fn update_keeps_id_and_overwrites_fields() {
        let store = MemoryStore::new();
        store
            .insert("produto", fields(json!({"name": "A", "category": "x"})))
            .await
            .unwrap();

        let updated = store
            .update("produto", "1", fields(json!({"name": "B", "category": null})))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated["id"], 1);
        assert_eq!(updated["name"], "B");
        assert_eq!(updated["category"], Value::Null);
    }

    #[tokio::test]
    async fn unknown_ids_are_absent() {
        let store = MemoryStore::new();

        assert!(store.fetch("produto", "999").await.unwrap().is_none());
        assert!(store.fetch("produto", "abc").await.unwrap().is_none());
        assert!(store
            .update("produto", "1", Fields::new())
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete("produto", "1").await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let store = MemoryStore::new();
        let id = store.seed("produto", fields(json!({"name": "A"}))).await;

        assert!(store.delete("produto", &id.to_string()).await.unwrap());
        assert!(store.list("produto").await.unwrap().is_empty());
    }
}
