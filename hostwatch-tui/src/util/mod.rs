//!
//! src/util/mod.rs
//! Util 层：与业务逻辑无关的基础设施
//!
//!     src/util/mod.rs
//!         mod logging;        // 文件日志（tracing-subscriber + tracing-appender）
//!         mod terminal;       // 终端初始化和恢复
//!
//! · init_terminal()
//!     - enable_raw_mode()：关闭行缓冲与回显，逐键读取
//!     - EnterAlternateScreen：切换到备用屏幕，退出后恢复原内容
//!
//! · restore_terminal()
//!     无论程序是正常退出还是发生错误，都必须调用，
//!     否则终端会保持在原始模式。
//!
//! · init_logging()
//!     原始模式下不能往 stdout 打日志，log 宏的输出统一写入按天滚动的文件。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, restore_terminal};
