//! 后台任务描述
//!
//! Update 层不直接发起网络请求，只描述要做什么；
//! 主循环把 `Effect` 交给 `backend::Executor` 执行。

use hostwatch_client::{EntityId, HostFields, IpFields, OsType};

use crate::i18n::Language;
use crate::model::Theme;

/// 待执行的后台任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    // ========== 主机 ==========
    LoadHosts { token: u64 },
    CreateHost(HostFields),
    UpdateHost { id: EntityId, fields: HostFields },
    RemoveHost(EntityId),
    CheckHostStatus {
        id: EntityId,
        os_type: OsType,
        hostname: String,
    },
    FetchLogs { id: EntityId, hostname: String },

    // ========== IP 注册表 ==========
    LoadIps { token: u64 },
    CreateIp(IpFields),
    UpdateIp { id: EntityId, fields: IpFields },
    RemoveIp(EntityId),

    // ========== 告警 ==========
    LoadAlerts { token: u64 },

    // ========== 设置 ==========
    SaveSettings { theme: Theme, language: Language },
}
