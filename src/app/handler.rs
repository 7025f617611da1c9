//! 通用处理器
//!
//! 每个处理器对任意 [`RecordKind`] 通用，在路由表中按记录类型实例化。

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::core::{AppError, RecordKind, RecordService};

#[derive(Clone)]
pub struct AppState {
    pub records: RecordService,
}

/// 无法解析的请求体（类型错误、非 JSON）按校验失败处理
fn payload_or_invalid<K: RecordKind>(
    payload: Result<Json<K::Payload>, JsonRejection>,
) -> Result<K::Payload, AppError> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => {
            debug!(table = K::TABLE, error = %rejection.body_text(), "rejected request body");
            Err(AppError::Validation(K::MESSAGES.invalid))
        }
    }
}

pub async fn list_records<K: RecordKind>(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, AppError> {
    let records = state.records.list::<K>().await?;
    Ok(Json(records))
}

pub async fn get_record<K: RecordKind>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let record = state.records.get::<K>(&id).await?;
    Ok(Json(record))
}

pub async fn create_record<K: RecordKind>(
    State(state): State<AppState>,
    payload: Result<Json<K::Payload>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let payload = payload_or_invalid::<K>(payload)?;
    let record = state.records.create::<K>(payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_record<K: RecordKind>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<K::Payload>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let payload = payload_or_invalid::<K>(payload)?;
    let record = state.records.update::<K>(&id, payload).await?;
    Ok(Json(record))
}

pub async fn delete_record<K: RecordKind>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.records.delete::<K>(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 健康检查：确认存储可用
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.records.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now()
            })),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "timestamp": chrono::Utc::now()
                })),
            )
        }
    }
}
