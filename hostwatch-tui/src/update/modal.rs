//! 弹窗更新逻辑

use crate::i18n::t;
use crate::message::{Effect, ModalMessage};
use crate::model::{App, DeleteTarget, FormMode, HostDraft, HostDraftError, IpDraft, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::HostForm { .. } => handle_host_form(app, msg),
        Modal::IpForm { .. } => handle_ip_form(app, msg),
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, msg),
        Modal::HostStatus { .. } | Modal::Help => handle_simple_modal(app, msg),
    }
}

/// 关闭弹窗；新建表单的内容保存为草稿
pub fn close(app: &mut App) {
    match app.modal.active.take() {
        Some(Modal::HostForm {
            mode: FormMode::Create,
            draft,
            ..
        }) => app.hosts.create_draft = draft,
        Some(Modal::IpForm {
            mode: FormMode::Create,
            draft,
            ..
        }) => app.ips.create_draft = draft,
        _ => {}
    }
    app.clear_status();
}

fn next_focus(focus: usize, total: usize) -> usize {
    (focus + 1) % total
}

fn prev_focus(focus: usize, total: usize) -> usize {
    if focus == 0 { total - 1 } else { focus - 1 }
}

/// 处理主机表单
fn handle_host_form(app: &mut App, msg: ModalMessage) {
    let Some(Modal::HostForm {
        ref mode,
        ref mut draft,
        ref mut focus,
        ref mut submitting,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => close(app),

        ModalMessage::NextField => *focus = next_focus(*focus, HostDraft::FIELD_COUNT),

        ModalMessage::PrevField => *focus = prev_focus(*focus, HostDraft::FIELD_COUNT),

        ModalMessage::PrevOption => {
            // 只有在操作系统字段时才切换
            if *focus == 2 {
                draft.os_type = draft.os_type.prev();
            }
        }

        ModalMessage::NextOption => {
            if *focus == 2 {
                draft.os_type = draft.os_type.next();
            }
        }

        ModalMessage::Input(ch) => {
            match *focus {
                0 => draft.hostname.push(ch),
                1 => draft.ip_address.push(ch),
                _ => {}
            }
            // 清除错误
            *error = None;
        }

        ModalMessage::Backspace => {
            match *focus {
                0 => {
                    draft.hostname.pop();
                }
                1 => {
                    draft.ip_address.pop();
                }
                _ => {}
            }
            *error = None;
        }

        ModalMessage::Confirm => {
            if *submitting {
                return;
            }
            let texts = &t().modal.host_form;
            let fields = match draft.to_fields() {
                Ok(fields) => fields,
                Err(HostDraftError::MissingHostname) => {
                    *error = Some(texts.hostname_required.to_string());
                    *focus = 0;
                    return;
                }
                Err(HostDraftError::MissingIpAddress) => {
                    *error = Some(texts.ip_required.to_string());
                    *focus = 1;
                    return;
                }
            };
            *submitting = true;
            *error = None;

            let effect = match mode {
                FormMode::Create => Effect::CreateHost(fields),
                FormMode::Edit(id) => Effect::UpdateHost {
                    id: id.clone(),
                    fields,
                },
            };
            app.set_status(t().common.submitting);
            app.dispatch(effect);
        }

        ModalMessage::ToggleDeleteFocus => {}
    }
}

/// 处理 IP 表单
fn handle_ip_form(app: &mut App, msg: ModalMessage) {
    let Some(Modal::IpForm {
        ref mode,
        ref mut draft,
        ref mut focus,
        ref mut submitting,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => close(app),

        ModalMessage::NextField => *focus = next_focus(*focus, IpDraft::FIELD_COUNT),

        ModalMessage::PrevField => *focus = prev_focus(*focus, IpDraft::FIELD_COUNT),

        ModalMessage::PrevOption => {
            if *focus == 1 {
                draft.prev_status();
            }
        }

        ModalMessage::NextOption => {
            if *focus == 1 {
                draft.next_status();
            }
        }

        ModalMessage::Input(ch) => {
            if *focus == 0 {
                draft.ip_address.push(ch);
            }
            *error = None;
        }

        ModalMessage::Backspace => {
            if *focus == 0 {
                draft.ip_address.pop();
            }
            *error = None;
        }

        ModalMessage::Confirm => {
            if *submitting {
                return;
            }
            let Some(fields) = draft.to_fields() else {
                *error = Some(t().modal.ip_form.ip_required.to_string());
                *focus = 0;
                return;
            };
            *submitting = true;
            *error = None;

            let effect = match mode {
                FormMode::Create => Effect::CreateIp(fields),
                FormMode::Edit(id) => Effect::UpdateIp {
                    id: id.clone(),
                    fields,
                },
            };
            app.set_status(t().common.submitting);
            app.dispatch(effect);
        }

        ModalMessage::ToggleDeleteFocus => {}
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        target,
        ref item_id,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => close(app),

        ModalMessage::ToggleDeleteFocus
        | ModalMessage::NextField
        | ModalMessage::PrevField
        | ModalMessage::PrevOption
        | ModalMessage::NextOption => {
            *focus = if *focus == 0 { 1 } else { 0 };
        }

        ModalMessage::Confirm => {
            if *focus != 1 {
                // 选择了取消：不发起任何请求
                close(app);
                return;
            }
            let id = item_id.clone();
            app.modal.close();
            match target {
                DeleteTarget::Host => {
                    app.set_status(t().hosts.deleting);
                    app.dispatch(Effect::RemoveHost(id));
                }
                DeleteTarget::Ip => {
                    app.set_status(t().ip_registry.deleting);
                    app.dispatch(Effect::RemoveIp(id));
                }
            }
        }

        ModalMessage::Input(_) | ModalMessage::Backspace => {}
    }
}

/// 处理简单弹窗（帮助、主机状态）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        close(app);
    }
}
