//! HostWatch Admin TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息与后台任务描述 (`message/`)
//! - **Update**: 状态更新，只排入 Effect，不做 IO (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与后台任务执行 (`backend/`)
//!
//!
//! main.rs 的执行顺序：
//!
//!     Cli::parse()              // 命令行参数（--api-url 也可来自 HOSTWATCH_API_URL）
//!     config_service.load()     // 读取 config.toml，缺失时使用默认值
//!     init_logging()            // 文件日志
//!     Runtime::new()            // 网络请求所在的 tokio 运行时
//!     App::new()                // 创建 APP 实例，并排入主机列表的首次刷新
//!     init_terminal()           // 原始模式 + 备用屏幕
//!     app::run()                // 运行 app.rs 主循环
//!     restore_terminal()        // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use hostwatch_client::ApiClient;
use tokio::sync::mpsc;

use backend::{AppConfig, ConfigService, Executor, FileConfigService, Services, default_config_path};
use util::{init_logging, init_terminal, restore_terminal};

/// HostWatch 终端管理面板
#[derive(Debug, Parser)]
#[command(name = "hostwatch", version, about)]
struct Cli {
    /// API 服务地址，例如 http://127.0.0.1:5000
    #[arg(long, env = "HOSTWATCH_API_URL")]
    api_url: Option<String>,

    /// 配置文件路径
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 日志目录
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    /// 命令行参数覆盖配置文件
    fn apply(&self, config: &mut AppConfig) {
        if let Some(ref url) = self.api_url {
            config.api_url.clone_from(url);
        }
        if let Some(ref dir) = self.log_dir {
            config.log_dir = Some(dir.clone());
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 加载配置
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config_service = Arc::new(FileConfigService::new(config_path));
    let mut config = config_service
        .load()
        .context("Failed to load configuration")?;
    cli.apply(&mut config);

    // 2. 初始化日志（guard 持有到程序结束）
    let _log_guard = init_logging(&config.log_dir())?;
    log::info!(
        "Starting HostWatch Admin v{} against {}",
        env!("CARGO_PKG_VERSION"),
        config.api_url
    );

    // 3. 后台运行时与 API 客户端
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let client = ApiClient::new(&config.client_config()).context("Invalid API configuration")?;
    let (tx, rx) = mpsc::unbounded_channel();
    let executor = Executor::new(
        runtime.handle().clone(),
        Services::from_client(&client, config_service),
        tx,
    );

    // 4. 创建应用实例
    let mut app = model::App::new();
    app.settings.theme = config.theme();
    app.settings.language = config.language();
    update::apply_settings(&app);
    update::refresh_hosts(&mut app);

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &executor, rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    }
    result
}
