use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for every call made against the HostWatch API.
///
/// The `Display` output of [`Status`](Self::Status) is the bare message so it
/// can be shown to the operator as-is: either the text the server put in its
/// `{"error": ...}` payload, or a generic per-operation message.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code")]
pub enum TransportError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server supplied message, or a generic one when none was available.
        message: String,
        /// Whether `message` came from the server payload.
        from_server: bool,
    },

    /// A network-level failure (connection refused, DNS resolution, reset, ...).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The request exceeded the configured timeout.
    #[error("Request timed out: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to parse response: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// The request body could not be encoded.
    #[error("Failed to serialize request: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The configured base URL (or a path joined to it) is not a valid URL.
    #[error("Invalid URL: {detail}")]
    InvalidUrl {
        /// Details about the URL problem.
        detail: String,
    },
}

impl TransportError {
    /// HTTP status of the failed response, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 是否为预期行为（服务端拒绝请求），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Status { status, .. } if (400..500).contains(status))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TransportError>;
