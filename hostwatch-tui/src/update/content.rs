//! 内容面板更新逻辑
//!
//! 处理内容面板中的各种操作消息

use crate::i18n::t;
use crate::message::{ContentMessage, Effect};
use crate::model::{App, DeleteTarget, FormMode, HostDraft, IpDraft, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => handle_select_previous(app),
        ContentMessage::SelectNext => handle_select_next(app),
        ContentMessage::SelectFirst => handle_select_first(app),
        ContentMessage::SelectLast => handle_select_last(app),
        ContentMessage::Confirm => handle_confirm(app),

        // ========== CRUD 操作 ==========
        ContentMessage::Add => handle_add(app),
        ContentMessage::Edit => handle_edit(app),
        ContentMessage::Delete => handle_delete(app),

        // ========== 主机专用 ==========
        ContentMessage::CheckStatus => handle_check_status(app),
        ContentMessage::FetchLogs => handle_fetch_logs(app),

        // ========== 设置页面专用 ==========
        ContentMessage::TogglePrev => handle_toggle(app, false),
        ContentMessage::ToggleNext => handle_toggle(app, true),
    }
}

// ========== 列表导航处理 ==========

fn handle_select_previous(app: &mut App) {
    match app.current_page {
        Page::Hosts => app.hosts.list.select_previous(),
        Page::IpRegistry => app.ips.list.select_previous(),
        Page::Alerts => app.alerts.list.select_previous(),
        Page::Settings => app.settings.select_previous(),
    }
}

fn handle_select_next(app: &mut App) {
    match app.current_page {
        Page::Hosts => app.hosts.list.select_next(),
        Page::IpRegistry => app.ips.list.select_next(),
        Page::Alerts => app.alerts.list.select_next(),
        Page::Settings => app.settings.select_next(),
    }
}

fn handle_select_first(app: &mut App) {
    match app.current_page {
        Page::Hosts => app.hosts.list.select_first(),
        Page::IpRegistry => app.ips.list.select_first(),
        Page::Alerts => app.alerts.list.select_first(),
        Page::Settings => {}
    }
}

fn handle_select_last(app: &mut App) {
    match app.current_page {
        Page::Hosts => app.hosts.list.select_last(),
        Page::IpRegistry => app.ips.list.select_last(),
        Page::Alerts => app.alerts.list.select_last(),
        Page::Settings => {}
    }
}

fn handle_confirm(app: &mut App) {
    match app.current_page {
        Page::Hosts => handle_check_status(app),
        Page::IpRegistry => handle_edit(app),
        Page::Settings => handle_toggle(app, true),
        Page::Alerts => {}
    }
}

// ========== CRUD 操作处理 ==========

fn handle_add(app: &mut App) {
    match app.current_page {
        Page::Hosts => {
            let draft = app.hosts.create_draft.clone();
            app.modal.show_host_form(FormMode::Create, draft);
        }
        Page::IpRegistry => {
            let draft = app.ips.create_draft.clone();
            app.modal.show_ip_form(FormMode::Create, draft);
        }
        Page::Alerts | Page::Settings => {}
    }
}

fn handle_edit(app: &mut App) {
    match app.current_page {
        Page::Hosts => {
            if let Some(host) = app.hosts.selected_host() {
                let id = host.id.clone();
                let draft = HostDraft::from_host(host);
                app.modal.show_host_form(FormMode::Edit(id), draft);
            } else {
                app.set_status(t().common.none_selected);
            }
        }
        Page::IpRegistry => {
            if let Some(entry) = app.ips.selected_entry() {
                let id = entry.id.clone();
                let draft = IpDraft::from_entry(entry);
                app.modal.show_ip_form(FormMode::Edit(id), draft);
            } else {
                app.set_status(t().common.none_selected);
            }
        }
        Page::Alerts | Page::Settings => {}
    }
}

fn handle_delete(app: &mut App) {
    match app.current_page {
        Page::Hosts => {
            if let Some(host) = app.hosts.selected_host() {
                let (name, id) = (host.hostname.clone(), host.id.clone());
                app.modal.show_confirm_delete(DeleteTarget::Host, &name, id);
            } else {
                app.set_status(t().common.none_selected);
            }
        }
        Page::IpRegistry => {
            if let Some(entry) = app.ips.selected_entry() {
                let (name, id) = (entry.ip_address.clone(), entry.id.clone());
                app.modal.show_confirm_delete(DeleteTarget::Ip, &name, id);
            } else {
                app.set_status(t().common.none_selected);
            }
        }
        Page::Alerts | Page::Settings => {}
    }
}

// ========== 主机操作 ==========

fn handle_check_status(app: &mut App) {
    if app.current_page != Page::Hosts {
        return;
    }
    let Some(host) = app.hosts.selected_host() else {
        app.set_status(t().common.none_selected);
        return;
    };
    let effect = Effect::CheckHostStatus {
        id: host.id.clone(),
        os_type: host.os_type,
        hostname: host.hostname.clone(),
    };
    let hostname = host.hostname.clone();
    app.modal.show_host_status(&hostname);
    app.dispatch(effect);
}

fn handle_fetch_logs(app: &mut App) {
    if app.current_page != Page::Hosts {
        return;
    }
    let Some(host) = app.hosts.selected_host() else {
        app.set_status(t().common.none_selected);
        return;
    };
    let (id, hostname) = (host.id.clone(), host.hostname.clone());
    app.set_status(format!("{} {hostname}...", t().hosts.fetching_logs));
    app.dispatch(Effect::FetchLogs { id, hostname });
}

// ========== 设置页面处理 ==========

fn handle_toggle(app: &mut App, forward: bool) {
    if app.current_page != Page::Settings {
        return;
    }
    if forward {
        app.settings.toggle_next();
    } else {
        app.settings.toggle_prev();
    }
    super::apply_settings(app);
    app.dispatch(Effect::SaveSettings {
        theme: app.settings.theme,
        language: app.settings.language,
    });
}
