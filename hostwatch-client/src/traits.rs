use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Alert, EntityId, HostStatusInfo, LogFetchResult, OsType};

/// CRUD contract shared by the host registry and the IP registry.
///
/// Every call is exactly one HTTP request/response pair; nothing is cached
/// and nothing is retried.
#[async_trait]
pub trait Registry: Send + Sync {
    /// Entity as returned by the server.
    type Entity: Send;
    /// Create/update payload.
    type Fields: Send + Sync;

    /// 获取完整列表（服务端顺序）
    async fn list(&self) -> Result<Vec<Self::Entity>>;

    /// 创建实体，失败时优先使用服务端返回的错误信息
    async fn create(&self, fields: &Self::Fields) -> Result<Self::Entity>;

    /// 全量更新实体
    async fn update(&self, id: &EntityId, fields: &Self::Fields) -> Result<Self::Entity>;

    /// 删除实体，只关心是否成功
    async fn remove(&self, id: &EntityId) -> Result<()>;
}

/// Live operations on a single managed host.
#[async_trait]
pub trait HostMonitor: Send + Sync {
    /// 读取主机资源状态（按操作系统选择端点）
    async fn check_status(&self, id: &EntityId, os_type: OsType) -> Result<HostStatusInfo>;

    /// 触发一次日志采集与分析
    async fn trigger_log_fetch(&self, id: &EntityId) -> Result<LogFetchResult>;
}

/// Read-only feed of security alerts.
#[async_trait]
pub trait AlertFeed: Send + Sync {
    async fn list_alerts(&self) -> Result<Vec<Alert>>;
}
