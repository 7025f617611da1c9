//! 记录类型元数据
//!
//! 通用处理器只依赖这里的 trait：表名、可写列、提示信息和读取投影。

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::infrastructure::Row;

/// 对客户端返回的固定提示信息
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub not_found: &'static str,
    pub invalid: &'static str,
    pub list_failed: &'static str,
    pub get_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
}

/// 存储操作，用于日志和选择失败提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    pub fn failure_message(self, messages: &Messages) -> &'static str {
        match self {
            Operation::List => messages.list_failed,
            Operation::Get => messages.get_failed,
            Operation::Create => messages.create_failed,
            Operation::Update => messages.update_failed,
            Operation::Delete => messages.delete_failed,
        }
    }
}

/// 一种记录类型
///
/// `Payload` 序列化后的键必须是存储的列名，且覆盖 `COLUMNS` 中的每一列。
pub trait RecordKind: Send + Sync + 'static {
    type Payload: DeserializeOwned + Serialize + Validate + Send + Sync + 'static;

    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    const MESSAGES: Messages;

    /// 列表、查询、更新时返回给客户端的形状
    fn project(row: Row) -> Value;

    /// 创建成功时返回给客户端的形状
    fn project_created(row: Row) -> Value {
        Self::project(row)
    }
}
