//! 弹窗/对话框状态

use std::collections::VecDeque;

use hostwatch_client::{EntityId, HostStatusInfo};

use super::{HostDraft, IpDraft};

/// 表单用途
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// 新建
    Create,
    /// 编辑已有实体
    Edit(EntityId),
}

impl FormMode {
    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create)
    }
}

/// 表单种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Host,
    Ip,
}

/// 删除目标类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Host,
    Ip,
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 新建/编辑主机
    HostForm {
        mode: FormMode,
        draft: HostDraft,
        /// 当前焦点：0=主机名, 1=IP, 2=操作系统
        focus: usize,
        /// 请求进行中，忽略重复提交
        submitting: bool,
        /// 本地校验错误
        error: Option<String>,
    },
    /// 新建/编辑 IP 条目
    IpForm {
        mode: FormMode,
        draft: IpDraft,
        /// 当前焦点：0=IP, 1=状态
        focus: usize,
        submitting: bool,
        error: Option<String>,
    },
    /// 确认删除
    ConfirmDelete {
        target: DeleteTarget,
        /// 项目名称
        item_name: String,
        /// 项目 ID
        item_id: EntityId,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 主机状态
    HostStatus {
        hostname: String,
        info: Option<HostStatusInfo>,
        loading: bool,
    },
    /// 帮助信息
    Help,
}

/// 阻塞式提示框，必须先关闭才能继续其他操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDialog {
    pub title: String,
    pub message: String,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
    /// 待确认的提示框，叠加在弹窗之上，按到达顺序显示
    pub alerts: VecDeque<AlertDialog>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示主机表单
    pub fn show_host_form(&mut self, mode: FormMode, draft: HostDraft) {
        self.active = Some(Modal::HostForm {
            mode,
            draft,
            focus: 0,
            submitting: false,
            error: None,
        });
    }

    /// 显示 IP 表单
    pub fn show_ip_form(&mut self, mode: FormMode, draft: IpDraft) {
        self.active = Some(Modal::IpForm {
            mode,
            draft,
            focus: 0,
            submitting: false,
            error: None,
        });
    }

    /// 显示确认删除弹窗（默认焦点在取消）
    pub fn show_confirm_delete(&mut self, target: DeleteTarget, item_name: &str, item_id: EntityId) {
        self.active = Some(Modal::ConfirmDelete {
            target,
            item_name: item_name.to_string(),
            item_id,
            focus: 0,
        });
    }

    /// 显示主机状态弹窗（加载中）
    pub fn show_host_status(&mut self, hostname: &str) {
        self.active = Some(Modal::HostStatus {
            hostname: hostname.to_string(),
            info: None,
            loading: true,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 压入一个提示框
    pub fn push_alert(&mut self, title: &str, message: &str) {
        self.alerts.push_back(AlertDialog {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 当前显示的提示框
    pub fn current_alert(&self) -> Option<&AlertDialog> {
        self.alerts.front()
    }

    /// 是否有未关闭的提示框
    pub fn has_alert(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// 关闭当前提示框
    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    /// 当前弹窗是否为正在等待该请求结果的表单
    pub fn awaits_submit(&self, kind: FormKind, target: &FormMode) -> bool {
        match self.active {
            Some(Modal::HostForm {
                ref mode,
                submitting,
                ..
            }) => kind == FormKind::Host && submitting && mode == target,
            Some(Modal::IpForm {
                ref mode,
                submitting,
                ..
            }) => kind == FormKind::Ip && submitting && mode == target,
            _ => false,
        }
    }

    /// 结束指定表单的提交状态（失败后允许再次提交），其他弹窗不受影响
    pub fn finish_submit(&mut self, kind: FormKind, target: &FormMode) {
        if !self.awaits_submit(kind, target) {
            return;
        }
        match self.active {
            Some(Modal::HostForm {
                ref mut submitting, ..
            })
            | Some(Modal::IpForm {
                ref mut submitting, ..
            }) => *submitting = false,
            _ => {}
        }
    }
}
