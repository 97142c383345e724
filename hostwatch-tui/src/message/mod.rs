//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!         mod backend;        // 后台任务结果
//!         mod effect;         // 后台任务描述
//!
//! 消息有两个来源：
//!     - event/handler.rs 把按键翻译成 AppMessage
//!     - backend::Executor 把请求结果包装成 AppMessage::Backend 送回主循环
//!
//! Update 层处理消息时可能排入新的 `Effect`，
//! 形成 按键 → Effect → 请求 → BackendMessage → 刷新 的闭环。

mod app;
mod backend;
mod content;
mod effect;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use effect::Effect;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
