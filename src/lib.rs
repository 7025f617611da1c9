//! # 商店记录服务
//!
//! 基于 Axum 与 PostgreSQL 的 HTTP 接口，为三种记录类型提供增删改查：
//! - 产品 (`/api/produtos`, `/api/produto/:id`)
//! - 分类 (`/categoria`)
//! - 账单 (`/boleto`)
//!
//! 每种记录类型由 [`core::RecordKind`] 描述，处理器只写一次并按类型实例化。

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod utils;

pub use app::{create_routes, handler::AppState};
pub use config::AppConfig;
pub use crate::core::{AppError, RecordKind, RecordService};
