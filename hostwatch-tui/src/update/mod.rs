//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod backend;            // 后台任务结果处理
//!
//! 每种实体（主机、IP）各自是一个独立的状态机：
//!
//!     Idle ──提交表单──▶ Submitting ──成功──▶ Refreshing ──▶ Idle
//!                             │
//!                             └──失败──▶ 提示框，表单保持打开 ──▶ Idle
//!
//!     Idle ──删除──▶ 确认弹窗 ──取消──▶ Idle（不发起任何请求）
//!                        └──确认──▶ Submitting ──▶ ...
//!
//! Update 层不直接访问网络：需要请求时调用 `app.dispatch(Effect)`，
//! 主循环在下一轮把这些 Effect 交给后台执行。

mod backend;
mod content;
mod modal;
mod navigation;

use crate::message::{AppMessage, Effect};
use crate::model::{App, FocusPanel, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                modal::close(app);
            } else if app.focus.is_content() {
                app.focus = FocusPanel::Navigation;
                app.clear_status();
            }
        }

        AppMessage::Refresh => {
            let page = app.current_page;
            if page.is_list_page() {
                app.set_status(crate::i18n::t().common.refreshing);
            }
            refresh_page(app, page);
        }

        AppMessage::ShowHelp => app.modal.show_help(),

        AppMessage::DismissAlert => app.modal.dismiss_alert(),

        AppMessage::Noop => {}
    }
}

/// 重新拉取主机列表
pub fn refresh_hosts(app: &mut App) {
    let token = app.hosts.list.begin_refresh();
    app.dispatch(Effect::LoadHosts { token });
}

/// 重新拉取 IP 注册表
pub fn refresh_ips(app: &mut App) {
    let token = app.ips.list.begin_refresh();
    app.dispatch(Effect::LoadIps { token });
}

/// 重新拉取告警列表
pub fn refresh_alerts(app: &mut App) {
    let token = app.alerts.list.begin_refresh();
    app.dispatch(Effect::LoadAlerts { token });
}

/// 刷新指定页面的数据（设置页面无数据）
pub fn refresh_page(app: &mut App, page: Page) {
    match page {
        Page::Hosts => refresh_hosts(app),
        Page::IpRegistry => refresh_ips(app),
        Page::Alerts => refresh_alerts(app),
        Page::Settings => {}
    }
}

/// 把设置同步到主题和语言
pub fn apply_settings(app: &App) {
    crate::view::theme::set_theme_index(app.settings.theme.index());
    crate::i18n::set_language(app.settings.language);
}
