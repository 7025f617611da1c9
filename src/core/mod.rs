//! 核心层：错误、中间件、记录类型元数据与通用服务

pub mod error;
pub mod kind;
pub mod middleware;
pub mod service;

pub use error::AppError;
pub use kind::{Messages, Operation, RecordKind};
pub use service::RecordService;
