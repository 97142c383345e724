//! Shared HTTP plumbing
//!
//! Every registry call goes through [`HttpUtils`]: send, log, read the body as
//! text, then map non-2xx statuses into [`TransportError`] according to the
//! operation's [`ErrorPolicy`].

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{Result, TransportError};
use crate::utils::log_sanitizer::truncate_for_log;

/// How a failed response is turned into an operator-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Ignore the body, always use the generic message.
    Generic(&'static str),
    /// Use the server's `{"error": ...}` when present, else the generic message.
    ServerOr(&'static str),
    /// Use the server's `{"error": ...}` when present, else `HTTP <status>`.
    ServerOrStatus,
}

/// HTTP 工具函数集
pub struct HttpUtils;

impl HttpUtils {
    /// 执行请求并返回 `(status, body)`
    ///
    /// Only transport-level failures are errors here; status handling is left
    /// to [`ensure_success`](Self::ensure_success).
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[hostwatch] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                TransportError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[hostwatch] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| TransportError::Network {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[hostwatch] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// 非 2xx 状态转换为 [`TransportError::Status`]
    pub fn ensure_success(status: u16, body: &str, policy: ErrorPolicy) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        let server_message = match policy {
            ErrorPolicy::Generic(_) => None,
            ErrorPolicy::ServerOr(_) | ErrorPolicy::ServerOrStatus => server_error_message(body),
        };

        let error = match (server_message, policy) {
            (Some(message), _) => TransportError::Status {
                status,
                message,
                from_server: true,
            },
            (None, ErrorPolicy::Generic(generic) | ErrorPolicy::ServerOr(generic)) => {
                TransportError::Status {
                    status,
                    message: generic.to_string(),
                    from_server: false,
                }
            }
            (None, ErrorPolicy::ServerOrStatus) => TransportError::Status {
                status,
                message: format!("HTTP {status}"),
                from_server: false,
            },
        };

        if error.is_expected() {
            log::warn!("[hostwatch] Request rejected ({status}): {error}");
        } else {
            log::error!("[hostwatch] Request failed ({status}): {error}");
        }
        Err(error)
    }

    /// 解析 JSON 响应
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[hostwatch] JSON parse failed: {e}");
            log::error!(
                "[hostwatch] Raw response: {}",
                truncate_for_log(response_text)
            );
            TransportError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

/// Extract `error` from a `{"error": "..."}` body.
///
/// Non-JSON bodies, other shapes and blank messages yield `None`.
pub fn server_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("error")?.as_str()?.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- server_error_message ----

    #[test]
    fn error_field_extracted() {
        assert_eq!(
            server_error_message(r#"{"error":"Host już istnieje"}"#).as_deref(),
            Some("Host już istnieje")
        );
    }

    #[test]
    fn non_json_or_missing_field_ignored() {
        assert_eq!(server_error_message("<html>500</html>"), None);
        assert_eq!(server_error_message(r#"{"message":"nope"}"#), None);
        assert_eq!(server_error_message(r#"{"error":42}"#), None);
        assert_eq!(server_error_message(r#"{"error":"  "}"#), None);
        assert_eq!(server_error_message(""), None);
    }

    // ---- ensure_success ----

    #[test]
    fn success_range_passes() {
        assert!(HttpUtils::ensure_success(200, "", ErrorPolicy::ServerOrStatus).is_ok());
        assert!(HttpUtils::ensure_success(204, "", ErrorPolicy::Generic("x")).is_ok());
    }

    #[test]
    fn server_message_preferred() {
        let err = HttpUtils::ensure_success(
            400,
            r#"{"error":"Nieprawidłowy adres IP"}"#,
            ErrorPolicy::ServerOr("Failed to add IP address"),
        );
        assert_eq!(
            err,
            Err(TransportError::Status {
                status: 400,
                message: "Nieprawidłowy adres IP".into(),
                from_server: true,
            })
        );
    }

    #[test]
    fn generic_policy_ignores_body() {
        let err = HttpUtils::ensure_success(
            404,
            r#"{"error":"not found"}"#,
            ErrorPolicy::Generic("Failed to delete host"),
        );
        assert_eq!(
            err.map_err(|e| e.to_string()),
            Err("Failed to delete host".to_string())
        );
    }

    #[test]
    fn status_fallback() {
        let err = HttpUtils::ensure_success(502, "", ErrorPolicy::ServerOrStatus);
        assert_eq!(err.map_err(|e| e.to_string()), Err("HTTP 502".to_string()));
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(TransportError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
