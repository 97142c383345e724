//! IP registry endpoints (`/api/hosts/ips`)

use async_trait::async_trait;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::Result;
use crate::http_client::ErrorPolicy;
use crate::registry::CreatedBody;
use crate::traits::Registry;
use crate::types::{EntityId, IpEntry, IpFields};

const IPS_PATH: &str = "/api/hosts/ips";

/// IP 注册表
#[derive(Debug, Clone)]
pub struct IpRegistryApi {
    api: ApiClient,
}

impl IpRegistryApi {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn ip_path(id: &EntityId) -> String {
    format!("{IPS_PATH}/{id}")
}

#[async_trait]
impl Registry for IpRegistryApi {
    type Entity = IpEntry;
    type Fields = IpFields;

    async fn list(&self) -> Result<Vec<IpEntry>> {
        self.api
            .call(
                Method::GET,
                IPS_PATH,
                ErrorPolicy::Generic("Failed to fetch the IP registry"),
            )
            .await
    }

    async fn create(&self, fields: &IpFields) -> Result<IpEntry> {
        let body: CreatedBody<IpEntry> = self
            .api
            .call_with_body(
                Method::POST,
                IPS_PATH,
                fields,
                ErrorPolicy::ServerOr("Failed to add IP address"),
            )
            .await?;
        Ok(body.into_entity())
    }

    async fn update(&self, id: &EntityId, fields: &IpFields) -> Result<IpEntry> {
        self.api
            .call_with_body(
                Method::PUT,
                &ip_path(id),
                fields,
                ErrorPolicy::Generic("Failed to update IP"),
            )
            .await
    }

    async fn remove(&self, id: &EntityId) -> Result<()> {
        self.api
            .call_ack(
                Method::DELETE,
                &ip_path(id),
                ErrorPolicy::Generic("Failed to delete IP"),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_interpolated() {
        assert_eq!(ip_path(&EntityId::from(7)), "/api/hosts/ips/7");
    }
}
