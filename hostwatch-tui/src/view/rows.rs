//! 列表行渲染
//!
//! 把实体列表转换成一份全新的 `RenderedList`，旧的行整体丢弃，从不就地修改。
//! 页面视图只负责把 `RenderedList` 画出来，选中高亮属于视图层。

use chrono::{DateTime, Local, Utc};
use hostwatch_client::{Alert, AlertSeverity, Host, IpEntry, IpStatus, OsType};

use crate::i18n::t;

/// 显示时间格式（本地时区）
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 徽标色调
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
    Warning,
    Neutral,
}

/// 行首指示符
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indicator {
    /// 图标
    Icon(&'static str),
    /// 带色调的单字符徽标
    Badge { label: String, tone: Tone },
}

/// 行内可执行的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

/// 一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub indicator: Option<Indicator>,
    pub primary: String,
    pub secondary: String,
    pub actions: Vec<RowAction>,
    /// 空列表占位行
    pub placeholder: bool,
}

impl Row {
    fn entity(indicator: Indicator, primary: String, secondary: String) -> Self {
        Self {
            indicator: Some(indicator),
            primary,
            secondary,
            actions: vec![RowAction::Edit, RowAction::Delete],
            placeholder: false,
        }
    }

    fn placeholder(text: &str) -> Self {
        Self {
            indicator: None,
            primary: text.to_string(),
            secondary: String::new(),
            actions: Vec::new(),
            placeholder: true,
        }
    }
}

/// 渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    pub rows: Vec<Row>,
}

impl RenderedList {
    /// 空列表时只有一行占位
    fn from_rows(rows: Vec<Row>, empty_text: &str) -> Self {
        if rows.is_empty() {
            Self {
                rows: vec![Row::placeholder(empty_text)],
            }
        } else {
            Self { rows }
        }
    }

    /// 是否只有占位行
    pub fn is_placeholder(&self) -> bool {
        matches!(self.rows.as_slice(), [row] if row.placeholder)
    }
}

/// 主机图标
pub fn host_icon(os_type: OsType) -> &'static str {
    match os_type {
        OsType::Linux => "🐧",
        OsType::Windows => "🪟",
    }
}

/// IP 状态徽标：状态首字母，TRUSTED 为成功色，BANNED 为危险色
pub fn ip_badge(status: &IpStatus) -> Indicator {
    let label = status
        .label()
        .chars()
        .next()
        .map_or_else(|| "?".to_string(), |ch| ch.to_string());
    let tone = match status {
        IpStatus::Trusted => Tone::Success,
        IpStatus::Banned => Tone::Danger,
        IpStatus::Unknown | IpStatus::Other(_) => Tone::Neutral,
    };
    Indicator::Badge { label, tone }
}

/// 告警级别徽标
pub fn severity_badge(severity: &AlertSeverity) -> Indicator {
    let (label, tone) = match severity {
        AlertSeverity::Critical => ("C".to_string(), Tone::Danger),
        AlertSeverity::Warning => ("W".to_string(), Tone::Warning),
        AlertSeverity::Info => ("I".to_string(), Tone::Neutral),
        AlertSeverity::Other(raw) => (
            raw.chars().next().map_or_else(|| "?".to_string(), |ch| ch.to_string()),
            Tone::Neutral,
        ),
    };
    Indicator::Badge { label, tone }
}

/// UTC 时间转换为本地时间显示，无值时为 `-`
pub fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(
        || "-".to_string(),
        |dt| dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
    )
}

/// 渲染主机列表
pub fn render_hosts(hosts: &[Host]) -> RenderedList {
    let rows = hosts
        .iter()
        .map(|host| {
            Row::entity(
                Indicator::Icon(host_icon(host.os_type)),
                host.hostname.clone(),
                host.ip_address.clone(),
            )
        })
        .collect();
    RenderedList::from_rows(rows, t().hosts.empty)
}

/// 渲染 IP 注册表
pub fn render_ips(entries: &[IpEntry]) -> RenderedList {
    let rows = entries
        .iter()
        .map(|entry| {
            Row::entity(
                ip_badge(&entry.status),
                entry.ip_address.clone(),
                format_timestamp(entry.last_seen),
            )
        })
        .collect();
    RenderedList::from_rows(rows, t().ip_registry.empty)
}

/// 渲染告警列表（只读，无操作）
pub fn render_alerts(alerts: &[Alert]) -> RenderedList {
    let rows = alerts
        .iter()
        .map(|alert| {
            let hostname = alert
                .hostname
                .clone()
                .unwrap_or_else(|| t().alerts.unknown_host.to_string());
            let mut secondary = format_timestamp(alert.timestamp);
            let summary = alert.summary();
            if !summary.is_empty() {
                secondary = format!("{secondary}  {summary}");
            }
            Row {
                indicator: Some(severity_badge(&alert.severity)),
                primary: hostname,
                secondary,
                actions: Vec::new(),
                placeholder: false,
            }
        })
        .collect();
    RenderedList::from_rows(rows, t().alerts.empty)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use hostwatch_client::{EntityId, datetime::parse_server_timestamp};

    use super::*;

    fn ip(status: IpStatus, last_seen: Option<DateTime<Utc>>) -> IpEntry {
        IpEntry {
            id: EntityId::from(1),
            ip_address: "203.0.113.7".into(),
            status,
            last_seen,
        }
    }

    #[test]
    fn empty_list_renders_one_placeholder_row() {
        for rendered in [render_hosts(&[]), render_ips(&[]), render_alerts(&[])] {
            assert_eq!(rendered.rows.len(), 1);
            assert!(rendered.is_placeholder());
            assert!(rendered.rows[0].actions.is_empty());
        }
    }

    #[test]
    fn host_rows_follow_server_order() {
        let hosts = vec![
            Host {
                id: EntityId::from(2),
                hostname: "win-02".into(),
                ip_address: "10.0.0.2".into(),
                os_type: OsType::Windows,
            },
            Host {
                id: EntityId::from(1),
                hostname: "web-01".into(),
                ip_address: "10.0.0.1".into(),
                os_type: OsType::Linux,
            },
        ];
        let rendered = render_hosts(&hosts);
        assert!(!rendered.is_placeholder());
        assert_eq!(rendered.rows[0].indicator, Some(Indicator::Icon("🪟")));
        assert_eq!(rendered.rows[0].primary, "win-02");
        assert_eq!(rendered.rows[1].indicator, Some(Indicator::Icon("🐧")));
        assert_eq!(rendered.rows[1].secondary, "10.0.0.1");
        assert_eq!(rendered.rows[1].actions, vec![RowAction::Edit, RowAction::Delete]);
    }

    #[test]
    fn ip_badges() {
        assert_eq!(
            ip_badge(&IpStatus::Banned),
            Indicator::Badge {
                label: "B".into(),
                tone: Tone::Danger
            }
        );
        assert_eq!(
            ip_badge(&IpStatus::Trusted),
            Indicator::Badge {
                label: "T".into(),
                tone: Tone::Success
            }
        );
        assert_eq!(
            ip_badge(&IpStatus::Unknown),
            Indicator::Badge {
                label: "U".into(),
                tone: Tone::Neutral
            }
        );
        assert_eq!(
            ip_badge(&IpStatus::Other("SUSPICIOUS".into())),
            Indicator::Badge {
                label: "S".into(),
                tone: Tone::Neutral
            }
        );
        assert_eq!(
            ip_badge(&IpStatus::Other(String::new())),
            Indicator::Badge {
                label: "?".into(),
                tone: Tone::Neutral
            }
        );
    }

    #[test]
    fn last_seen_is_shown_in_local_time() {
        let parsed = parse_server_timestamp("2024-01-01 00:00:00");
        let expected_utc = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single();
        assert_eq!(parsed, expected_utc);

        let rendered = render_ips(&[ip(IpStatus::Trusted, parsed)]);
        let expected = expected_utc
            .map(|dt| dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string())
            .unwrap_or_default();
        assert_eq!(rendered.rows[0].secondary, expected);
        assert_eq!(rendered.rows[0].primary, "203.0.113.7");
    }

    #[test]
    fn missing_last_seen_renders_dash() {
        let rendered = render_ips(&[ip(IpStatus::Unknown, None)]);
        assert_eq!(rendered.rows[0].secondary, "-");
    }

    #[test]
    fn alert_rows_are_read_only() {
        let alert: Alert = serde_json::from_str(
            r#"{"hostname":"web-01","severity":"CRITICAL","message":"Banned IP 1.2.3.4"}"#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        let rendered = render_alerts(&[alert]);
        let row = &rendered.rows[0];
        assert_eq!(row.primary, "web-01");
        assert!(row.secondary.ends_with("Banned IP 1.2.3.4"));
        assert!(row.actions.is_empty());
        assert_eq!(
            row.indicator,
            Some(Indicator::Badge {
                label: "C".into(),
                tone: Tone::Danger
            })
        );
    }
}
