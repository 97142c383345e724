use async_trait::async_trait;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::Result;
use crate::http_client::ErrorPolicy;
use crate::traits::AlertFeed;
use crate::types::Alert;

/// 告警列表
#[derive(Debug, Clone)]
pub struct AlertsApi {
    api: ApiClient,
}

impl AlertsApi {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AlertFeed for AlertsApi {
    async fn list_alerts(&self) -> Result<Vec<Alert>> {
        self.api
            .call(
                Method::GET,
                "/api/hosts/alerts",
                ErrorPolicy::Generic("Failed to fetch alerts"),
            )
            .await
    }
}
