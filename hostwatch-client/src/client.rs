//! HostWatch API client

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Result, TransportError};
use crate::http_client::{ErrorPolicy, HttpUtils};
use crate::registry::{AlertsApi, HostsApi, IpRegistryApi};
use crate::utils::log_sanitizer::mask_secret;

/// 默认 API 地址
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port of the API server, without the `/api` prefix.
    pub base_url: String,
    /// Pre-obtained session cookie (`name=value`), forwarded as-is.
    pub session_cookie: Option<String>,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_cookie: None,
            timeout: None,
        }
    }
}

/// Cheap-to-clone handle to the HostWatch API.
///
/// The resource handles returned by [`hosts`](Self::hosts),
/// [`ips`](Self::ips) and [`alerts`](Self::alerts) share the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl ApiClient {
    /// 根据配置创建客户端
    ///
    /// Fails with [`TransportError::InvalidUrl`] when `base_url` is not an
    /// absolute http(s) URL.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| TransportError::Network {
            detail: format!("Failed to create HTTP client: {e}"),
        })?;

        log::info!(
            "[hostwatch] API client ready: base_url={base_url}, cookie={}, timeout={:?}",
            config
                .session_cookie
                .as_deref()
                .map_or_else(|| "none".to_string(), mask_secret),
            config.timeout
        );

        Ok(Self {
            client,
            base_url,
            session_cookie: config.session_cookie.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn hosts(&self) -> HostsApi {
        HostsApi::new(self.clone())
    }

    pub fn ips(&self) -> IpRegistryApi {
        IpRegistryApi::new(self.clone())
    }

    pub fn alerts(&self) -> AlertsApi {
        AlertsApi::new(self.clone())
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.session_cookie {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    /// 发送无请求体的请求并解析 JSON 响应
    pub(crate) async fn call<T>(&self, method: Method, path: &str, policy: ErrorPolicy) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let builder = self.request(method.clone(), &url);
        let (status, body) = HttpUtils::execute_request(builder, method.as_str(), &url).await?;
        HttpUtils::ensure_success(status, &body, policy)?;
        HttpUtils::parse_json(&body)
    }

    /// 发送 JSON 请求体并解析 JSON 响应
    pub(crate) async fn call_with_body<B, T>(
        &self,
        method: Method,
        path: &str,
        payload: &B,
        policy: ErrorPolicy,
    ) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(payload).map_err(|e| TransportError::Serialization {
            detail: e.to_string(),
        })?;
        let url = self.url(path);
        let builder = self
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        let (status, body) = HttpUtils::execute_request(builder, method.as_str(), &url).await?;
        HttpUtils::ensure_success(status, &body, policy)?;
        HttpUtils::parse_json(&body)
    }

    /// 发送请求，只检查状态码，忽略响应体
    pub(crate) async fn call_ack(&self, method: Method, path: &str, policy: ErrorPolicy) -> Result<()> {
        let url = self.url(path);
        let builder = self.request(method.clone(), &url);
        let (status, body) = HttpUtils::execute_request(builder, method.as_str(), &url).await?;
        HttpUtils::ensure_success(status, &body, policy)
    }
}

/// Validate and strip trailing slashes from the configured base URL.
fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| TransportError::InvalidUrl {
        detail: format!("{trimmed}: {e}"),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(TransportError::InvalidUrl {
            detail: format!("{trimmed}: expected an http(s) URL"),
        });
    }
    Ok(trimmed.to_string())
}
