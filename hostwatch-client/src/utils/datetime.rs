//! `last_seen` 时间戳序列化/反序列化
//!
//! 服务端以 UTC 存储时间，但输出时不带时区（`"2024-01-01 00:00:00"`）。
//! - 反序列化: 无时区字符串（按 UTC 解释）、RFC3339、Unix 时间戳 -> `DateTime<Utc>`；
//!   `null`、空串、`"-"` 视为无值
//! - 序列化: `DateTime<Utc>` -> `"%Y-%m-%d %H:%M:%S"`

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// 服务端使用的无时区格式
pub const SERVER_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 可接受的无时区格式（带/不带小数秒，空格或 `T` 分隔）
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// 把服务端时间字符串按 UTC 解析
///
/// 带偏移量的 RFC3339 字符串会换算到 UTC；无法识别时返回 `None`。
pub fn parse_server_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// 序列化 `Option<DateTime<Utc>>`
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.format(SERVER_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

/// 反序列化：字符串或 Unix 时间戳（秒/毫秒自动识别）
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        String(String),
        I64(i64),
    }

    match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(RawTimestamp::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed == "-" {
                return Ok(None);
            }
            parse_server_timestamp(trimmed)
                .map(Some)
                .ok_or_else(|| Error::custom(format!("Invalid timestamp: {trimmed}")))
        }
        Some(RawTimestamp::I64(ts)) => parse_unix_timestamp(ts)
            .map(Some)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
        None => Ok(None),
    }
}

/// 解析 Unix 时间戳（> 10^11 视为毫秒）
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::Serialize;

    #[derive(Debug, Deserialize, Serialize)]
    struct Wrapper {
        #[serde(default, with = "super")]
        at: Option<DateTime<Utc>>,
    }

    fn midnight() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default()
    }

    #[test]
    fn naive_string_is_utc() {
        assert_eq!(parse_server_timestamp("2024-01-01 00:00:00"), Some(midnight()));
        assert_eq!(parse_server_timestamp("2024-01-01T00:00:00"), Some(midnight()));
    }

    #[test]
    fn fractional_seconds_accepted() {
        let parsed = parse_server_timestamp("2024-01-01 00:00:00.123456");
        assert_eq!(parsed.map(|d| d.timestamp()), Some(midnight().timestamp()));
    }

    #[test]
    fn rfc3339_with_offset_converted() {
        assert_eq!(
            parse_server_timestamp("2024-01-01T02:00:00+02:00"),
            Some(midnight())
        );
    }

    #[test]
    fn dash_and_empty_mean_absent() {
        assert_eq!(parse_server_timestamp("-"), None);
        assert_eq!(parse_server_timestamp("  "), None);
    }

    #[test]
    fn deserialize_variants() {
        let w: Wrapper = serde_json::from_str(r#"{"at":"2024-01-01 00:00:00"}"#)
            .unwrap_or(Wrapper { at: None });
        assert_eq!(w.at, Some(midnight()));

        let w: Wrapper = serde_json::from_str(r#"{"at":null}"#).unwrap_or(Wrapper {
            at: Some(midnight()),
        });
        assert_eq!(w.at, None);

        let w: Wrapper = serde_json::from_str(r#"{"at":"-"}"#).unwrap_or(Wrapper {
            at: Some(midnight()),
        });
        assert_eq!(w.at, None);

        let w: Wrapper = serde_json::from_str("{}").unwrap_or(Wrapper {
            at: Some(midnight()),
        });
        assert_eq!(w.at, None);

        let w: Wrapper =
            serde_json::from_str(r#"{"at":1704067200}"#).unwrap_or(Wrapper { at: None });
        assert_eq!(w.at, Some(midnight()));
    }

    #[test]
    fn garbage_rejected() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"at":"yesterday"}"#).is_err());
    }

    #[test]
    fn serialize_uses_server_format() {
        let json = serde_json::to_string(&Wrapper {
            at: Some(midnight()),
        })
        .unwrap_or_default();
        assert_eq!(json, r#"{"at":"2024-01-01 00:00:00"}"#);
    }
}
