//!
//! src/backend/mod.rs
//! Backend 层：与 UI 解耦的服务
//!
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件读写（TOML）
//!         mod executor;           // 后台任务执行器
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在弹窗中按 Enter
//!         ↓
//!     Update 层处理 ModalMessage::Confirm，排入 Effect::CreateHost
//!         ↓
//!     主循环 take_effects()，交给 Executor::spawn
//!         ↓
//!     tokio 运行时上调用 hostwatch-client（一次 HTTP 请求）
//!         ↓
//!     结果包装为 BackendMessage，经 mpsc channel 回到主循环
//!         ↓
//!     Update 层关闭弹窗并排入 Effect::LoadHosts（刷新）
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod executor;

pub use config_service::{AppConfig, ConfigService, FileConfigService, default_config_path};
pub use executor::{Executor, Services};
