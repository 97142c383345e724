//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message，本身不修改任何状态。
//!
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         pub mod keymap;     // 快捷键映射（状态栏也读取其显示名称）
//!
//! 处理顺序（handler.rs）：
//!     1. 只处理 Press 事件
//!     2. 有提示框时，只接受 Enter / Esc / Space / Ctrl+C，统一转为 DismissAlert
//!     3. 有弹窗打开时，按弹窗类型分发
//!     4. 全局快捷键
//!     5. 按焦点分发到导航面板或内容面板
//!

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};
