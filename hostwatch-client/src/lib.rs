//! # hostwatch-client
//!
//! Typed async client for the HostWatch API: the host registry, the IP
//! registry and the security alert feed.
//!
//! Each operation is a single HTTP request/response pair. Non-2xx answers are
//! turned into [`TransportError::Status`] carrying either the server's
//! `{"error": ...}` message or a generic per-operation message that can be
//! shown to an operator as-is. There is no caching and no retry.
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hostwatch_client::{ApiClient, ClientConfig, HostFields, OsType, Registry};
//!
//! # async fn example() -> hostwatch_client::Result<()> {
//! let api = ApiClient::new(&ClientConfig::default())?;
//! let hosts = api.hosts();
//!
//! let created = hosts
//!     .create(&HostFields {
//!         hostname: "web-01".into(),
//!         ip_address: "10.0.0.5".into(),
//!         os_type: OsType::Linux,
//!     })
//!     .await?;
//!
//! for host in hosts.list().await? {
//!     println!("{} {} {}", host.id, host.hostname, host.ip_address);
//! }
//!
//! hosts.remove(&created.id).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod http_client;
mod registry;
mod traits;
mod types;
mod utils;

pub use client::{ApiClient, ClientConfig, DEFAULT_BASE_URL};
pub use error::{Result, TransportError};
pub use registry::{AlertsApi, HostsApi, IpRegistryApi};
pub use traits::{AlertFeed, HostMonitor, Registry};
pub use types::{
    Alert, AlertSeverity, EntityId, Host, HostFields, HostStatusInfo, IpEntry, IpFields, IpStatus,
    LogFetchResult, OsType,
};

pub use utils::datetime;
