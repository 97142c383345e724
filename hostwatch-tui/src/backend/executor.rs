//! 后台任务执行器
//!
//! 把 Update 层排入的 `Effect` 放到 tokio 运行时上执行，
//! 完成后把结果包装成 `BackendMessage` 发回主循环。

use std::sync::Arc;

use hostwatch_client::{
    AlertFeed, ApiClient, Host, HostFields, HostMonitor, IpEntry, IpFields, Registry,
};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::i18n::Language;
use crate::message::{AppMessage, BackendMessage, Effect};
use crate::model::Theme;

use super::config_service::ConfigService;

/// 主机服务：注册表 + 在线操作
pub trait HostService: Registry<Entity = Host, Fields = HostFields> + HostMonitor {}

impl<T> HostService for T where T: Registry<Entity = Host, Fields = HostFields> + HostMonitor {}

/// IP 注册表服务
pub type IpService = dyn Registry<Entity = IpEntry, Fields = IpFields>;

/// 执行器依赖的服务集合
#[derive(Clone)]
pub struct Services {
    pub hosts: Arc<dyn HostService>,
    pub ips: Arc<IpService>,
    pub alerts: Arc<dyn AlertFeed>,
    pub config: Arc<dyn ConfigService>,
}

impl Services {
    /// 基于 HTTP 客户端创建服务集合
    pub fn from_client(client: &ApiClient, config: Arc<dyn ConfigService>) -> Self {
        Self {
            hosts: Arc::new(client.hosts()),
            ips: Arc::new(client.ips()),
            alerts: Arc::new(client.alerts()),
            config,
        }
    }
}

/// 后台任务执行器
pub struct Executor {
    handle: Handle,
    services: Services,
    tx: UnboundedSender<AppMessage>,
}

impl Executor {
    pub fn new(handle: Handle, services: Services, tx: UnboundedSender<AppMessage>) -> Self {
        Self {
            handle,
            services,
            tx,
        }
    }

    /// 启动一个后台任务，不等待结果
    pub fn spawn(&self, effect: Effect) {
        log::debug!("Spawning {effect:?}");

        let services = self.services.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let msg = run(&services, effect).await;
            if tx.send(AppMessage::Backend(msg)).is_err() {
                log::debug!("UI loop has exited, dropping backend result");
            }
        });
    }
}

/// 执行单个任务并生成结果消息
async fn run(services: &Services, effect: Effect) -> BackendMessage {
    match effect {
        // ========== 主机 ==========
        Effect::LoadHosts { token } => BackendMessage::HostsLoaded {
            token,
            result: services.hosts.list().await,
        },
        Effect::CreateHost(fields) => BackendMessage::HostCreated(services.hosts.create(&fields).await),
        Effect::UpdateHost { id, fields } => BackendMessage::HostUpdated {
            result: services.hosts.update(&id, &fields).await,
            id,
        },
        Effect::RemoveHost(id) => BackendMessage::HostRemoved(services.hosts.remove(&id).await),
        Effect::CheckHostStatus {
            id,
            os_type,
            hostname,
        } => BackendMessage::HostStatus {
            hostname,
            result: services.hosts.check_status(&id, os_type).await,
        },
        Effect::FetchLogs { id, hostname } => BackendMessage::LogsFetched {
            hostname,
            result: services.hosts.trigger_log_fetch(&id).await,
        },

        // ========== IP 注册表 ==========
        Effect::LoadIps { token } => BackendMessage::IpsLoaded {
            token,
            result: services.ips.list().await,
        },
        Effect::CreateIp(fields) => BackendMessage::IpCreated(services.ips.create(&fields).await),
        Effect::UpdateIp { id, fields } => BackendMessage::IpUpdated {
            result: services.ips.update(&id, &fields).await,
            id,
        },
        Effect::RemoveIp(id) => BackendMessage::IpRemoved(services.ips.remove(&id).await),

        // ========== 告警 ==========
        Effect::LoadAlerts { token } => BackendMessage::AlertsLoaded {
            token,
            result: services.alerts.list_alerts().await,
        },

        // ========== 设置（文件 IO 放到阻塞线程池） ==========
        Effect::SaveSettings { theme, language } => {
            let config = Arc::clone(&services.config);
            let result = tokio::task::spawn_blocking(move || {
                save_settings(config.as_ref(), theme, language)
            })
            .await
            .unwrap_or_else(|e| Err(e.to_string()));
            BackendMessage::SettingsSaved(result)
        }
    }
}

/// 只改写外观设置，其余配置项保持文件中的值
fn save_settings(
    service: &dyn ConfigService,
    theme: Theme,
    language: Language,
) -> Result<(), String> {
    let mut config = service.load().map_err(|e| e.to_string())?;
    config.set_appearance(theme, language);
    service.save(&config).map_err(|e| e.to_string())
}
