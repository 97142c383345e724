//! 日志初始化
//!
//! 终端处于原始模式，日志只能写文件：按天滚动，默认级别 info，
//! 可通过 `HOSTWATCH_LOG` 环境变量覆盖（EnvFilter 语法）。

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 日志级别环境变量
pub const LOG_ENV: &str = "HOSTWATCH_LOG";

/// 日志文件名前缀
const LOG_FILE: &str = "hostwatch.log";

/// 初始化文件日志，返回的 guard 需要一直持有到程序退出
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE);
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
        .context("Failed to install log subscriber")?;

    Ok(guard)
}
