//! Wire types of the HostWatch API.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

// ============ 标识符 ============

/// Server-assigned identifier.
///
/// Opaque to the client: it is accepted as a JSON number or string and only
/// ever written back into URL paths, never invented locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            I64(i64),
            U64(u64),
            String(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::I64(id) => Self(id.to_string()),
            RawId::U64(id) => Self(id.to_string()),
            RawId::String(id) => Self(id),
        })
    }
}

// ============ Host ============

/// Operating system family of a managed host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OsType {
    #[default]
    Linux,
    Windows,
}

impl OsType {
    /// All selectable values, in form order.
    pub fn all() -> &'static [OsType] {
        &[OsType::Linux, OsType::Windows]
    }

    /// Wire name (`LINUX` / `WINDOWS`).
    pub fn as_str(self) -> &'static str {
        match self {
            OsType::Linux => "LINUX",
            OsType::Windows => "WINDOWS",
        }
    }

    #[must_use]
    pub fn next(self) -> OsType {
        match self {
            OsType::Linux => OsType::Windows,
            OsType::Windows => OsType::Linux,
        }
    }

    #[must_use]
    pub fn prev(self) -> OsType {
        self.next()
    }
}

/// A managed machine record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub id: EntityId,
    pub hostname: String,
    pub ip_address: String,
    pub os_type: OsType,
}

impl Host {
    /// Editable fields of this host (what the edit dialog is populated with).
    pub fn fields(&self) -> HostFields {
        HostFields {
            hostname: self.hostname.clone(),
            ip_address: self.ip_address.clone(),
            os_type: self.os_type,
        }
    }
}

/// Create/update payload for a host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HostFields {
    pub hostname: String,
    pub ip_address: String,
    pub os_type: OsType,
}

/// Live resource figures reported for a host (`ssh-info` / `windows-info`).
///
/// Values are preformatted by the server ("512", "43%", "20G", "3h 12m").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostStatusInfo {
    pub free_ram_mb: String,
    pub disk_info: String,
    pub disk_total: String,
    pub cpu_load: String,
    pub uptime_hours: String,
}

/// Outcome of a log collection run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogFetchResult {
    #[serde(default)]
    pub message: String,
    /// Number of alerts raised while analysing the collected logs.
    #[serde(default)]
    pub alerts: u64,
    /// Archive file the logs were written to; absent when nothing new was collected.
    #[serde(default)]
    pub archive: Option<String>,
}

// ============ IP Registry ============

/// Trust status of a registered address.
///
/// Statuses the client does not know are preserved verbatim in
/// [`IpStatus::Other`] so they survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum IpStatus {
    Trusted,
    Banned,
    #[default]
    Unknown,
    Other(String),
}

impl IpStatus {
    /// Statuses offered in create/edit forms.
    pub fn selectable() -> &'static [IpStatus] {
        &[IpStatus::Trusted, IpStatus::Banned, IpStatus::Unknown]
    }

    /// Wire label.
    pub fn label(&self) -> &str {
        match self {
            IpStatus::Trusted => "TRUSTED",
            IpStatus::Banned => "BANNED",
            IpStatus::Unknown => "UNKNOWN",
            IpStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for IpStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "TRUSTED" => IpStatus::Trusted,
            "BANNED" => IpStatus::Banned,
            "UNKNOWN" => IpStatus::Unknown,
            _ => IpStatus::Other(raw),
        }
    }
}

impl fmt::Display for IpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for IpStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for IpStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?
            .map(IpStatus::from)
            .unwrap_or_default())
    }
}

/// A tracked network address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpEntry {
    pub id: EntityId,
    pub ip_address: String,
    #[serde(default)]
    pub status: IpStatus,
    /// Last time the address showed up in collected logs (UTC).
    #[serde(default, with = "crate::utils::datetime")]
    pub last_seen: Option<DateTime<Utc>>,
}

impl IpEntry {
    pub fn fields(&self) -> IpFields {
        IpFields {
            ip_address: self.ip_address.clone(),
            status: self.status.clone(),
        }
    }
}

/// Create/update payload for an IP registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IpFields {
    pub ip_address: String,
    pub status: IpStatus,
}

// ============ Alerts ============

/// Alert severity as assigned by the log analyser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AlertSeverity {
    #[default]
    Info,
    Warning,
    Critical,
    Other(String),
}

impl AlertSeverity {
    pub fn label(&self) -> &str {
        match self {
            AlertSeverity::Info => "INFO",
            AlertSeverity::Warning => "WARNING",
            AlertSeverity::Critical => "CRITICAL",
            AlertSeverity::Other(raw) => raw,
        }
    }
}

impl From<String> for AlertSeverity {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "INFO" => AlertSeverity::Info,
            "WARNING" => AlertSeverity::Warning,
            "CRITICAL" => AlertSeverity::Critical,
            _ => AlertSeverity::Other(raw),
        }
    }
}

impl Serialize for AlertSeverity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for AlertSeverity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?
            .map(AlertSeverity::from)
            .unwrap_or_default())
    }
}

/// A security alert raised by the backend.
///
/// The payload shape is only loosely specified; known fields are typed and
/// everything else is kept in [`extra`](Self::extra).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub host_id: Option<EntityId>,
    /// Host name joined in by the server.
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub alert_type: Option<String>,
    #[serde(default)]
    pub source_ip: Option<String>,
    #[serde(default, alias = "level")]
    pub severity: AlertSeverity,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "created_at", with = "crate::utils::datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Alert {
    /// Human readable description, falling back to `description` or the alert type.
    pub fn summary(&self) -> String {
        self.message
            .clone()
            .or_else(|| {
                self.extra
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .or_else(|| self.alert_type.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_from_number_or_string() {
        let a: EntityId = serde_json::from_str("7").unwrap_or_else(|_| EntityId::new(""));
        let b: EntityId = serde_json::from_str(r#""7""#).unwrap_or_else(|_| EntityId::new(""));
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "7");
    }

    #[test]
    fn host_parses_server_payload() {
        let json = r#"{"id":3,"hostname":"web-01","ip_address":"10.0.0.3","os_type":"WINDOWS"}"#;
        let host: Host = serde_json::from_str(json).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(host.id, EntityId::from(3));
        assert_eq!(host.os_type, OsType::Windows);
        assert_eq!(
            host.fields(),
            HostFields {
                hostname: "web-01".into(),
                ip_address: "10.0.0.3".into(),
                os_type: OsType::Windows,
            }
        );
    }

    #[test]
    fn host_fields_serialize_wire_names() {
        let fields = HostFields {
            hostname: "db".into(),
            ip_address: "10.0.0.9".into(),
            os_type: OsType::Linux,
        };
        let json = serde_json::to_value(&fields).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({"hostname":"db","ip_address":"10.0.0.9","os_type":"LINUX"})
        );
    }

    #[test]
    fn ip_status_keeps_unknown_values() {
        let entry: IpEntry = serde_json::from_str(
            r#"{"id":1,"ip_address":"1.2.3.4","status":"SUSPICIOUS","last_seen":null}"#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(entry.status, IpStatus::Other("SUSPICIOUS".into()));
        assert_eq!(entry.status.label(), "SUSPICIOUS");
        assert_eq!(entry.last_seen, None);
    }

    #[test]
    fn ip_status_missing_or_null_is_unknown() {
        let entry: IpEntry = serde_json::from_str(r#"{"id":1,"ip_address":"1.2.3.4","status":null}"#)
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(entry.status, IpStatus::Unknown);
    }

    #[test]
    fn log_fetch_result_without_archive() {
        let r: LogFetchResult =
            serde_json::from_str(r#"{"message":"Brak nowych logów do pobrania","alerts":0}"#)
                .unwrap_or_default();
        assert_eq!(r.alerts, 0);
        assert!(r.archive.is_none());
    }

    #[test]
    fn alert_keeps_extra_fields() {
        let alert: Alert = serde_json::from_str(
            r#"{"id":5,"host_id":2,"hostname":"web-01","severity":"CRITICAL",
                "message":"Banned IP","timestamp":"2024-01-01 10:00:00","rule":"ssh"}"#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(alert.severity, AlertSeverity::Critical);
        assert_eq!(alert.summary(), "Banned IP");
        assert_eq!(alert.extra.get("rule"), Some(&Value::from("ssh")));
    }

    #[test]
    fn alert_summary_falls_back_to_type() {
        let alert: Alert = serde_json::from_str(r#"{"alert_type":"FAILED_LOGIN"}"#)
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(alert.summary(), "FAILED_LOGIN");
        assert_eq!(alert.severity, AlertSeverity::Info);
    }

    #[test]
    fn alert_accepts_level_and_created_at() {
        let alert: Alert = serde_json::from_str(
            r#"{"level":"WARNING","created_at":"2024-01-01 00:00:00","description":"odd login"}"#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(alert.severity, AlertSeverity::Warning);
        assert!(alert.timestamp.is_some());
        assert_eq!(alert.summary(), "odd login");
    }
}
