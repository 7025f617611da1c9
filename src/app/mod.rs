//! 应用层：记录类型与路由

pub mod boleto;
pub mod categoria;
pub mod handler;
pub mod produto;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use boleto::Boleto;
use categoria::Categoria;
use handler::{
    create_record, delete_record, get_record, health_check, list_records, update_record, AppState,
};
use produto::Produto;

/// 创建路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // 产品
        .route(
            "/api/produtos",
            get(list_records::<Produto>).post(create_record::<Produto>),
        )
        .route("/api/produto/:id", get(get_record::<Produto>))
        .route(
            "/api/produtos/:id",
            put(update_record::<Produto>).delete(delete_record::<Produto>),
        )
        // 分类
        .route(
            "/categoria",
            get(list_records::<Categoria>).post(create_record::<Categoria>),
        )
        // 账单
        .route(
            "/boleto",
            get(list_records::<Boleto>).post(create_record::<Boleto>),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
