//! 页面状态定义

use crate::i18n::t;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 主机列表
    #[default]
    Hosts,
    /// IP 注册表
    IpRegistry,
    /// 安全告警
    Alerts,
    /// 设置
    Settings,
}

impl Page {
    /// 获取页面标题
    pub fn title(self) -> &'static str {
        let nav = &t().nav;
        match self {
            Page::Hosts => nav.hosts,
            Page::IpRegistry => nav.ip_registry,
            Page::Alerts => nav.alerts,
            Page::Settings => nav.settings,
        }
    }

    /// 是否是可刷新的列表页面
    pub fn is_list_page(self) -> bool {
        !matches!(self, Page::Settings)
    }
}
