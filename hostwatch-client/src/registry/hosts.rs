//! Host registry endpoints (`/api/hosts/...`)

use async_trait::async_trait;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::Result;
use crate::http_client::ErrorPolicy;
use crate::registry::CreatedBody;
use crate::traits::{HostMonitor, Registry};
use crate::types::{EntityId, Host, HostFields, HostStatusInfo, LogFetchResult, OsType};

const HOSTS_PATH: &str = "/api/hosts/hosts";

/// 主机注册表
#[derive(Debug, Clone)]
pub struct HostsApi {
    api: ApiClient,
}

impl HostsApi {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn host_path(id: &EntityId) -> String {
    format!("/api/hosts/{id}")
}

#[async_trait]
impl Registry for HostsApi {
    type Entity = Host;
    type Fields = HostFields;

    async fn list(&self) -> Result<Vec<Host>> {
        self.api
            .call(
                Method::GET,
                HOSTS_PATH,
                ErrorPolicy::Generic("Failed to fetch hosts"),
            )
            .await
    }

    async fn create(&self, fields: &HostFields) -> Result<Host> {
        let body: CreatedBody<Host> = self
            .api
            .call_with_body(
                Method::POST,
                HOSTS_PATH,
                fields,
                ErrorPolicy::ServerOr("Failed to create host"),
            )
            .await?;
        Ok(body.into_entity())
    }

    async fn update(&self, id: &EntityId, fields: &HostFields) -> Result<Host> {
        self.api
            .call_with_body(
                Method::PUT,
                &host_path(id),
                fields,
                ErrorPolicy::Generic("Failed to update host"),
            )
            .await
    }

    async fn remove(&self, id: &EntityId) -> Result<()> {
        self.api
            .call_ack(
                Method::DELETE,
                &host_path(id),
                ErrorPolicy::Generic("Failed to delete host"),
            )
            .await
    }
}

#[async_trait]
impl HostMonitor for HostsApi {
    async fn check_status(&self, id: &EntityId, os_type: OsType) -> Result<HostStatusInfo> {
        let endpoint = match os_type {
            OsType::Linux => "ssh-info",
            OsType::Windows => "windows-info",
        };
        self.api
            .call(
                Method::GET,
                &format!("/api/hosts/{id}/{endpoint}"),
                ErrorPolicy::ServerOrStatus,
            )
            .await
    }

    async fn trigger_log_fetch(&self, id: &EntityId) -> Result<LogFetchResult> {
        self.api
            .call(
                Method::POST,
                &format!("/api/hosts/{id}/logs"),
                ErrorPolicy::ServerOr("Failed to fetch logs"),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_interpolated() {
        assert_eq!(host_path(&EntityId::from(42)), "/api/hosts/42");
        assert_eq!(host_path(&EntityId::from("a-1")), "/api/hosts/a-1");
    }
}
