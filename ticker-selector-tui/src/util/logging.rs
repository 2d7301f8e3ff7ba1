//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入数据目录下按天滚动的文件。
//! 库里通过 `log` 宏记录的内容由 tracing-subscriber 自带的 log 桥接收集。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志级别环境变量
pub const LOG_ENV: &str = "TICKER_SELECTOR_LOG";

const LOG_FILE_PREFIX: &str = "ticker-selector.log";

/// 默认日志目录：`<data_dir>/ticker-selector/logs`
pub fn default_log_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir().context("Could not determine the data directory")?;
    Ok(dir.join("ticker-selector").join("logs"))
}

/// 安装全局 subscriber，返回的 guard 需要保持到程序结束
pub fn init_logging(dir: Option<&Path>) -> Result<WorkerGuard> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => default_log_dir()?,
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install the log subscriber")?;

    tracing::info!("Logging to {}", dir.display());
    Ok(guard)
}
