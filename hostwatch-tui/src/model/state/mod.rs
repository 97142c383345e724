//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod alerts;
mod hosts;
mod ip_registry;
mod list;
mod modal;
mod request_tracker;
mod settings;

pub use alerts::AlertsState;
pub use hosts::{HostDraft, HostDraftError, HostsState};
pub use ip_registry::{IpDraft, IpRegistryState};
pub use list::{EntityList, RefreshOutcome};
pub use modal::{AlertDialog, DeleteTarget, FormKind, FormMode, Modal, ModalState};
pub use request_tracker::RequestTracker;
pub use settings::{SettingItem, SettingsState, Theme};
