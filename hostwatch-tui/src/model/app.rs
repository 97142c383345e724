//! 应用主状态结构

use crate::message::Effect;

use super::{
    AlertsState, FocusPanel, HostsState, IpRegistryState, ModalState, NavigationState, Page,
    SettingsState,
};

/// 应用主状态
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 主机页面状态
    pub hosts: HostsState,
    /// IP 注册表页面状态
    pub ips: IpRegistryState,
    /// 告警页面状态
    pub alerts: AlertsState,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 待执行的后台任务，由主循环取走
    effects: Vec<Effect>,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Hosts,
            status_message: None,
            hosts: HostsState::new(),
            ips: IpRegistryState::new(),
            alerts: AlertsState::new(),
            settings: SettingsState::new(),
            modal: ModalState::new(),
            effects: Vec::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 排入一个后台任务
    pub fn dispatch(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// 取走所有待执行的后台任务
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
