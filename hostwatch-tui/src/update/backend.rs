//! 后台任务结果处理
//!
//! 写操作成功后关闭对应表单并整体刷新列表；失败时弹出提示框，列表保持不变。
//! 刷新失败只记录日志并显示在状态栏，不弹提示框。

use hostwatch_client::{HostStatusInfo, TransportError};

use crate::i18n::t;
use crate::message::BackendMessage;
use crate::model::{App, FormKind, FormMode, Modal, RefreshOutcome};

/// 处理后台任务结果
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        // ========== 列表刷新 ==========
        BackendMessage::HostsLoaded { token, result } => {
            let outcome = app.hosts.list.apply_refresh(token, result.map_err(|e| e.to_string()));
            report_refresh(app, "hosts", t().hosts.load_failed, token, outcome);
        }
        BackendMessage::IpsLoaded { token, result } => {
            let outcome = app.ips.list.apply_refresh(token, result.map_err(|e| e.to_string()));
            report_refresh(app, "ips", t().ip_registry.load_failed, token, outcome);
        }
        BackendMessage::AlertsLoaded { token, result } => {
            let outcome = app.alerts.list.apply_refresh(token, result.map_err(|e| e.to_string()));
            report_refresh(app, "alerts", t().alerts.load_failed, token, outcome);
        }

        // ========== 主机写操作 ==========
        BackendMessage::HostCreated(result) => match result {
            Ok(host) => {
                log::info!("[hosts] created {} ({})", host.hostname, host.id);
                close_submitted_form(app, FormKind::Host, &FormMode::Create);
                app.hosts.create_draft = Default::default();
                app.set_status(t().hosts.created);
                super::refresh_hosts(app);
            }
            Err(e) => {
                app.modal.finish_submit(FormKind::Host, &FormMode::Create);
                report_write_failure(app, "create host", &e);
            }
        },
        BackendMessage::HostUpdated { id, result } => {
            let origin = FormMode::Edit(id);
            match result {
                Ok(host) => {
                    log::info!("[hosts] updated {} ({})", host.hostname, host.id);
                    close_submitted_form(app, FormKind::Host, &origin);
                    app.set_status(t().hosts.updated);
                    super::refresh_hosts(app);
                }
                Err(e) => {
                    app.modal.finish_submit(FormKind::Host, &origin);
                    report_write_failure(app, "update host", &e);
                }
            }
        }
        BackendMessage::HostRemoved(result) => match result {
            Ok(()) => {
                app.set_status(t().hosts.deleted);
                super::refresh_hosts(app);
            }
            Err(e) => report_write_failure(app, "delete host", &e),
        },

        // ========== IP 写操作 ==========
        BackendMessage::IpCreated(result) => match result {
            Ok(entry) => {
                log::info!("[ips] created {} ({})", entry.ip_address, entry.id);
                close_submitted_form(app, FormKind::Ip, &FormMode::Create);
                app.ips.create_draft = Default::default();
                app.set_status(t().ip_registry.created);
                super::refresh_ips(app);
            }
            Err(e) => {
                app.modal.finish_submit(FormKind::Ip, &FormMode::Create);
                report_write_failure(app, "add IP", &e);
            }
        },
        BackendMessage::IpUpdated { id, result } => {
            let origin = FormMode::Edit(id);
            match result {
                Ok(entry) => {
                    log::info!("[ips] updated {} ({})", entry.ip_address, entry.id);
                    close_submitted_form(app, FormKind::Ip, &origin);
                    app.set_status(t().ip_registry.updated);
                    super::refresh_ips(app);
                }
                Err(e) => {
                    app.modal.finish_submit(FormKind::Ip, &origin);
                    report_write_failure(app, "update IP", &e);
                }
            }
        }
        BackendMessage::IpRemoved(result) => match result {
            Ok(()) => {
                app.set_status(t().ip_registry.deleted);
                super::refresh_ips(app);
            }
            Err(e) => report_write_failure(app, "delete IP", &e),
        },

        // ========== 主机操作 ==========
        BackendMessage::HostStatus { hostname, result } => handle_host_status(app, &hostname, result),
        BackendMessage::LogsFetched { hostname, result } => match result {
            Ok(outcome) => {
                log::info!(
                    "[hosts] logs collected from {hostname}: alerts={}, archive={:?}",
                    outcome.alerts,
                    outcome.archive
                );
                app.set_status(format!(
                    "{hostname}: {} ({} {})",
                    outcome.message,
                    outcome.alerts,
                    t().hosts.logs_alerts
                ));
                if outcome.alerts > 0 {
                    super::refresh_alerts(app);
                }
            }
            Err(e) => report_write_failure(app, "collect logs", &e),
        },

        // ========== 设置 ==========
        BackendMessage::SettingsSaved(result) => match result {
            Ok(()) => app.set_status(t().settings.saved),
            Err(message) => {
                log::warn!("[settings] save failed: {message}");
                app.set_status(format!("{}: {message}", t().settings.save_failed));
            }
        },
    }
}

fn report_refresh(
    app: &mut App,
    panel: &str,
    failure_text: &str,
    token: u64,
    outcome: RefreshOutcome,
) {
    match outcome {
        RefreshOutcome::Applied => {}
        RefreshOutcome::Failed(message) => {
            log::error!("[{panel}] refresh failed: {message}");
            app.set_status(format!("{failure_text}: {message}"));
        }
        RefreshOutcome::Stale => {
            log::debug!("[{panel}] discarded stale refresh response #{token}");
        }
    }
}

/// 写操作失败：记录日志并弹出提示框
fn report_write_failure(app: &mut App, action: &str, error: &TransportError) {
    if error.is_expected() {
        log::warn!("[controller] {action} rejected: {error}");
    } else {
        log::error!("[controller] {action} failed: {error}");
    }
    app.clear_status();
    app.modal
        .push_alert(t().modal.alert.error_title, &error.to_string());
}

/// 若当前弹窗是发起该请求且仍在提交中的表单，则关闭它
fn close_submitted_form(app: &mut App, kind: FormKind, origin: &FormMode) {
    if app.modal.awaits_submit(kind, origin) {
        app.modal.close();
    } else {
        log::debug!("[controller] {kind:?} form {origin:?} already closed");
    }
}

fn handle_host_status(
    app: &mut App,
    hostname: &str,
    result: Result<HostStatusInfo, TransportError>,
) {
    let showing_host = matches!(
        app.modal.active,
        Some(Modal::HostStatus { hostname: ref shown, .. }) if shown == hostname
    );

    match result {
        Ok(status) => {
            // 弹窗已关闭或已切换到其他主机时丢弃
            if !showing_host {
                return;
            }
            if let Some(Modal::HostStatus {
                ref mut info,
                ref mut loading,
                ..
            }) = app.modal.active
            {
                *info = Some(status);
                *loading = false;
            }
        }
        Err(e) => {
            if showing_host {
                app.modal.close();
            }
            report_write_failure(app, "check host status", &e);
        }
    }
}
