//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何网络调用。
//! 所有状态变更都通过 Update 层来触发。
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//! 列表页面（主机、IP 注册表、告警）共用 `EntityList`：
//!     - items 是最近一次成功刷新的完整副本，只整体替换
//!     - 每次刷新发出一个递增序号，过期的响应直接丢弃
//!
//! 写操作不会直接修改列表，而是由 Update 层排入 `Effect`，
//! 主循环交给后台执行，结果以 `BackendMessage` 的形式回到 Update 层，
//! 成功后再发起一次完整刷新。

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use state::{
    AlertDialog, AlertsState, DeleteTarget, EntityList, FormKind, FormMode, HostDraft,
    HostDraftError, HostsState, IpDraft, IpRegistryState, Modal, ModalState, RefreshOutcome,
    SettingItem, SettingsState, Theme,
};
