//! IP 注册表页面状态

use hostwatch_client::{IpEntry, IpFields, IpStatus};

use super::EntityList;

/// IP 表单草稿
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpDraft {
    pub ip_address: String,
    pub status: IpStatus,
}

impl IpDraft {
    /// 表单字段数：IP、状态
    pub const FIELD_COUNT: usize = 2;

    /// 用已有条目填充（编辑），未知状态原样保留
    pub fn from_entry(entry: &IpEntry) -> Self {
        Self {
            ip_address: entry.ip_address.clone(),
            status: entry.status.clone(),
        }
    }

    /// 切换到下一个可选状态
    pub fn next_status(&mut self) {
        self.status = cycle_status(&self.status, 1);
    }

    /// 切换到上一个可选状态
    pub fn prev_status(&mut self) {
        let options = IpStatus::selectable().len();
        self.status = cycle_status(&self.status, options - 1);
    }

    /// 校验并转换为请求体，IP 为空白时返回 `None`，否则按输入原样发送
    pub fn to_fields(&self) -> Option<IpFields> {
        if self.ip_address.trim().is_empty() {
            return None;
        }
        Some(IpFields {
            ip_address: self.ip_address.clone(),
            status: self.status.clone(),
        })
    }
}

fn cycle_status(current: &IpStatus, step: usize) -> IpStatus {
    let options = IpStatus::selectable();
    // 未知的服务端状态从第一项开始
    let index = options
        .iter()
        .position(|status| status == current)
        .map_or(0, |index| (index + step) % options.len());
    options[index].clone()
}

/// IP 注册表页面状态
#[derive(Debug, Default)]
pub struct IpRegistryState {
    /// 注册表条目
    pub list: EntityList<IpEntry>,
    /// 新建表单草稿
    pub create_draft: IpDraft,
}

impl IpRegistryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取当前选中的条目
    pub fn selected_entry(&self) -> Option<&IpEntry> {
        self.list.selected_item()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_cycles_through_selectable_values() {
        let mut draft = IpDraft::default();
        assert_eq!(draft.status, IpStatus::Unknown);
        draft.next_status();
        assert_eq!(draft.status, IpStatus::Trusted);
        draft.next_status();
        assert_eq!(draft.status, IpStatus::Banned);
        draft.prev_status();
        assert_eq!(draft.status, IpStatus::Trusted);
        draft.prev_status();
        assert_eq!(draft.status, IpStatus::Unknown);
    }

    #[test]
    fn unrecognized_status_is_kept_until_changed() {
        let mut draft = IpDraft {
            ip_address: "1.2.3.4".into(),
            status: IpStatus::Other("SUSPICIOUS".into()),
        };
        assert_eq!(
            draft.to_fields().map(|f| f.status),
            Some(IpStatus::Other("SUSPICIOUS".into()))
        );
        draft.next_status();
        assert_eq!(draft.status, IpStatus::Trusted);
    }

    #[test]
    fn blank_ip_is_rejected() {
        let draft = IpDraft {
            ip_address: "  ".into(),
            status: IpStatus::Banned,
        };
        assert_eq!(draft.to_fields(), None);
    }

    #[test]
    fn address_is_sent_as_entered() {
        let draft = IpDraft {
            ip_address: " 203.0.113.7".into(),
            status: IpStatus::Banned,
        };
        assert_eq!(
            draft.to_fields().map(|f| f.ip_address).as_deref(),
            Some(" 203.0.113.7")
        );
    }
}
