//! 日志基础设施

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

const DEFAULT_FILTER: &str = "info,tower_http=info,sqlx=warn";

pub struct Logger;

impl Logger {
    /// 初始化全局 tracing 订阅者；`RUST_LOG` 优先于默认过滤规则
    pub fn init(format: LogFormat) {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false);

        // 重复初始化（例如测试中）时忽略错误
        let _ = match format {
            LogFormat::Compact => builder.compact().try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
    }
}
