//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use super::kind::Operation;
use crate::infrastructure::StoreError;

/// 核心错误类型
///
/// 每种错误只携带静态提示；存储错误的细节只写入日志。
#[derive(Debug)]
pub enum AppError {
    /// 缺少必填字段 (400)
    Validation(&'static str),

    /// 标识对应的记录不存在 (404)
    NotFound(&'static str),

    /// 存储操作失败 (500)
    Store {
        message: &'static str,
        operation: Operation,
        table: &'static str,
        source: StoreError,
    },
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg,
            AppError::Store {
                message,
                operation,
                table,
                source,
            } => {
                error!(
                    operation = operation.as_str(),
                    table,
                    error = %source,
                    "{}",
                    message
                );
                message
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
