//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `hosts.*`, `settings.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 主机页面文本
    pub hosts: HostsTexts,
    /// IP 注册表页面文本
    pub ip_registry: IpRegistryTexts,
    /// 告警页面文本
    pub alerts: AlertsTexts,
    /// 设置页面文本
    pub settings: SettingsTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    // 操作动词
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub refresh: &'static str,
    pub quit: &'static str,
    // 状态词
    pub loading: &'static str,
    pub refreshing: &'static str,
    pub submitting: &'static str,
    pub error: &'static str,
    pub none_selected: &'static str,
    // 导航词
    pub back: &'static str,
    pub select: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str,  // "←→"
    pub arrows_ud: &'static str,  // "↑↓"
    pub tab_arrows: &'static str, // "Tab/↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub switch_option: &'static str,
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub status: &'static str,
    pub logs: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub hosts: &'static str,
    pub ip_registry: &'static str,
    pub alerts: &'static str,
    pub settings: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 主机页面文本
pub struct HostsTexts {
    pub empty: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub deleting: &'static str,
    pub load_failed: &'static str,
    pub fetching_logs: &'static str,
    pub logs_alerts: &'static str,
}

/// IP 注册表页面文本
pub struct IpRegistryTexts {
    pub empty: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub deleting: &'static str,
    pub load_failed: &'static str,
    pub never_seen: &'static str,
}

/// 告警页面文本
pub struct AlertsTexts {
    pub empty: &'static str,
    pub load_failed: &'static str,
    pub unknown_host: &'static str,
}

/// 设置页面文本
pub struct SettingsTexts {
    pub theme: ThemeTexts,
    pub language: LanguageTexts,
    pub saved: &'static str,
    pub save_failed: &'static str,
}

pub struct ThemeTexts {
    pub label: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
}

pub struct LanguageTexts {
    pub label: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub host_form: HostFormTexts,
    pub ip_form: IpFormTexts,
    pub confirm_delete: ConfirmDeleteTexts,
    pub host_status: HostStatusTexts,
    pub alert: AlertDialogTexts,
    pub form_hints: &'static str,
}

/// 主机表单
pub struct HostFormTexts {
    pub add_title: &'static str,
    pub edit_title: &'static str,
    pub hostname: &'static str,
    pub hostname_hint: &'static str,
    pub ip_address: &'static str,
    pub ip_address_hint: &'static str,
    pub os_type: &'static str,
    pub hostname_required: &'static str,
    pub ip_required: &'static str,
}

/// IP 表单
pub struct IpFormTexts {
    pub add_title: &'static str,
    pub edit_title: &'static str,
    pub ip_address: &'static str,
    pub ip_address_hint: &'static str,
    pub status: &'static str,
    pub ip_required: &'static str,
}

/// 确认删除
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub host: &'static str,
    pub ip: &'static str,
}

/// 主机状态弹窗
pub struct HostStatusTexts {
    pub title: &'static str,
    pub checking: &'static str,
    pub free_ram: &'static str,
    pub disk_used: &'static str,
    pub disk_total: &'static str,
    pub cpu_load: &'static str,
    pub uptime: &'static str,
}

/// 阻塞式提示框
pub struct AlertDialogTexts {
    pub error_title: &'static str,
    pub dismiss: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub operations: &'static str,
    pub actions: HelpActionTexts,
    pub close_hint: &'static str,
}

pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub confirm: &'static str,
    pub back: &'static str,
    pub refresh: &'static str,
    pub quit: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub status: &'static str,
    pub logs: &'static str,
}
