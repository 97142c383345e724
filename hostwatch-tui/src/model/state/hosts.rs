//! 主机页面状态

use hostwatch_client::{Host, HostFields, OsType};

use super::EntityList;

/// 主机表单草稿
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostDraft {
    pub hostname: String,
    pub ip_address: String,
    pub os_type: OsType,
}

/// 主机表单校验失败的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostDraftError {
    MissingHostname,
    MissingIpAddress,
}

impl HostDraft {
    /// 表单字段数：主机名、IP、操作系统
    pub const FIELD_COUNT: usize = 3;

    /// 用已有主机填充（编辑）
    pub fn from_host(host: &Host) -> Self {
        Self {
            hostname: host.hostname.clone(),
            ip_address: host.ip_address.clone(),
            os_type: host.os_type,
        }
    }

    /// 校验并转换为请求体：空白字段被拒绝，其余按输入原样发送
    pub fn to_fields(&self) -> Result<HostFields, HostDraftError> {
        if self.hostname.trim().is_empty() {
            return Err(HostDraftError::MissingHostname);
        }
        if self.ip_address.trim().is_empty() {
            return Err(HostDraftError::MissingIpAddress);
        }
        Ok(HostFields {
            hostname: self.hostname.clone(),
            ip_address: self.ip_address.clone(),
            os_type: self.os_type,
        })
    }
}

/// 主机页面状态
#[derive(Debug, Default)]
pub struct HostsState {
    /// 主机列表
    pub list: EntityList<Host>,
    /// 新建表单草稿，跨弹窗打开/关闭保留，创建成功后清空
    pub create_draft: HostDraft,
}

impl HostsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取当前选中的主机
    pub fn selected_host(&self) -> Option<&Host> {
        self.list.selected_item()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_hostname_and_ip() {
        let mut draft = HostDraft::default();
        assert_eq!(draft.to_fields(), Err(HostDraftError::MissingHostname));

        draft.hostname = "web-01".into();
        draft.ip_address = "   ".into();
        assert_eq!(draft.to_fields(), Err(HostDraftError::MissingIpAddress));
    }

    #[test]
    fn draft_is_sent_as_entered() {
        let draft = HostDraft {
            hostname: " web-01 ".into(),
            ip_address: "10.0.0.5 ".into(),
            os_type: OsType::Windows,
        };
        let fields = draft.to_fields().unwrap_or_default();
        assert_eq!(fields.hostname, " web-01 ");
        assert_eq!(fields.ip_address, "10.0.0.5 ");
        assert_eq!(fields.os_type, OsType::Windows);
    }
}
