use loja_api::{
    config::{AppConfig, StoreBackend},
    create_routes,
    infrastructure::{DatabaseManager, Logger, MemoryStore, RecordStore},
    AppState, RecordService,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    Logger::init(config.log_format);

    info!("Starting record service...");

    // 连接池在启动时获取一次，关闭时显式释放
    let database = match &config.database {
        Some(db_config) => Some(DatabaseManager::new(db_config).await.map_err(|e| {
            error!("Erro ao conectar ao banco de dados: {}", e);
            e
        })?),
        None => None,
    };

    let store: Arc<dyn RecordStore> = match (&database, config.backend) {
        (Some(db), StoreBackend::Postgres) => Arc::new(db.store()),
        _ => {
            warn!("Using in-memory store; records are lost on shutdown");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState {
        records: RecordService::new(store),
    };
    let app = create_routes(state);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    info!("🚀 Servidor rodando em http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = database {
        db.close().await;
    }

    info!("Server stopped");
    Ok(())
}

/// Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
