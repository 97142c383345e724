//! 后台任务结果消息
//!
//! 每个网络请求完成后，结果通过 channel 回到主循环，再交给 Update 层。

use hostwatch_client::{
    Alert, EntityId, Host, HostStatusInfo, IpEntry, LogFetchResult, TransportError,
};

/// 后台任务结果
#[derive(Debug, Clone)]
pub enum BackendMessage {
    // ========== 列表刷新 ==========
    /// 主机列表（携带请求序号）
    HostsLoaded {
        token: u64,
        result: Result<Vec<Host>, TransportError>,
    },
    /// IP 注册表
    IpsLoaded {
        token: u64,
        result: Result<Vec<IpEntry>, TransportError>,
    },
    /// 告警列表
    AlertsLoaded {
        token: u64,
        result: Result<Vec<Alert>, TransportError>,
    },

    // ========== 写操作 ==========
    HostCreated(Result<Host, TransportError>),
    /// 更新结果（携带被编辑的主机 id）
    HostUpdated {
        id: EntityId,
        result: Result<Host, TransportError>,
    },
    HostRemoved(Result<(), TransportError>),
    IpCreated(Result<IpEntry, TransportError>),
    IpUpdated {
        id: EntityId,
        result: Result<IpEntry, TransportError>,
    },
    IpRemoved(Result<(), TransportError>),

    // ========== 主机操作 ==========
    /// 主机状态
    HostStatus {
        hostname: String,
        result: Result<HostStatusInfo, TransportError>,
    },
    /// 日志采集
    LogsFetched {
        hostname: String,
        result: Result<LogFetchResult, TransportError>,
    },

    /// 设置已写入配置文件
    SettingsSaved(Result<(), String>),
}
