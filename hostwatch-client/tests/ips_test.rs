//! IP 注册表与告警接口测试（httpmock）

mod common;

use chrono::{TimeZone, Utc};
use httpmock::prelude::*;
use serde_json::json;

use common::client_for;
use hostwatch_client::{AlertFeed, AlertSeverity, EntityId, IpFields, IpStatus, Registry};

#[tokio::test]
async fn list_parses_status_and_last_seen() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/hosts/ips");
            then.status(200).json_body(json!([
                {"id": 1, "ip_address": "203.0.113.7", "status": "BANNED", "last_seen": "2024-01-01 00:00:00"},
                {"id": 2, "ip_address": "10.0.0.1", "status": "TRUSTED", "last_seen": null},
                {"id": 3, "ip_address": "198.51.100.2", "status": "WATCH"}
            ]));
        })
        .await;

    let Some(api) = client_for(&server) else {
        panic!("client should build");
    };
    let entries = require_ok!(api.ips().list().await);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].status, IpStatus::Banned);
    assert_eq!(
        entries[0].last_seen,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single()
    );
    assert_eq!(entries[1].status, IpStatus::Trusted);
    assert_eq!(entries[1].last_seen, None);
    assert_eq!(entries[2].status, IpStatus::Other("WATCH".into()));
}

#[tokio::test]
async fn create_posts_fields_and_returns_entry() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/hosts/ips")
                .json_body(json!({"ip_address": "192.0.2.10", "status": "TRUSTED"}));
            then.status(201).json_body(json!({
                "id": 11, "ip_address": "192.0.2.10", "status": "TRUSTED", "last_seen": null
            }));
        })
        .await;

    let Some(api) = client_for(&server) else {
        panic!("client should build");
    };
    let fields = IpFields {
        ip_address: "192.0.2.10".into(),
        status: IpStatus::Trusted,
    };
    let created = require_ok!(api.ips().create(&fields).await);
    assert_eq!(created.fields(), fields);
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn create_accepts_entry_paired_with_status() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/hosts/ips");
            then.status(200).json_body(json!([
                {"id": 11, "ip_address": "203.0.113.9", "status": "BANNED", "last_seen": null},
                201
            ]));
        })
        .await;

    let Some(api) = client_for(&server) else {
        panic!("client should build");
    };
    let fields = IpFields {
        ip_address: "203.0.113.9".into(),
        status: IpStatus::Banned,
    };
    let created = require_ok!(api.ips().create(&fields).await);
    assert_eq!(created.id, EntityId::from(11));
    assert_eq!(created.fields(), fields);
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn create_conflict_surfaces_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/hosts/ips");
            then.status(409)
                .json_body(json!({"error": "Adres IP już istnieje w rejestrze"}));
        })
        .await;

    let Some(api) = client_for(&server) else {
        panic!("client should build");
    };
    let err = require_err!(
        api.ips()
            .create(&IpFields {
                ip_address: "192.0.2.10".into(),
                status: IpStatus::Unknown,
            })
            .await
    );
    assert_eq!(err.to_string(), "Adres IP już istnieje w rejestrze");
}

#[tokio::test]
async fn update_and_remove_use_id_scoped_paths() {
    let server = MockServer::start_async().await;
    let update = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/hosts/ips/5")
                .json_body(json!({"ip_address": "192.0.2.5", "status": "BANNED"}));
            then.status(200).json_body(json!({
                "id": 5, "ip_address": "192.0.2.5", "status": "BANNED", "last_seen": "2024-03-01 12:30:00"
            }));
        })
        .await;
    let remove = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/hosts/ips/5");
            then.status(204);
        })
        .await;

    let Some(api) = client_for(&server) else {
        panic!("client should build");
    };
    let ips = api.ips();
    let id = EntityId::from(5);
    let updated = require_ok!(
        ips.update(
            &id,
            &IpFields {
                ip_address: "192.0.2.5".into(),
                status: IpStatus::Banned,
            },
        )
        .await
    );
    assert_eq!(updated.status, IpStatus::Banned);
    require_ok!(ips.remove(&id).await);

    update.assert_calls_async(1).await;
    remove.assert_calls_async(1).await;
}

#[tokio::test]
async fn failures_use_generic_messages() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/hosts/ips");
            then.status(500);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/hosts/ips/8");
            then.status(404).json_body(json!({"error": "missing"}));
        })
        .await;

    let Some(api) = client_for(&server) else {
        panic!("client should build");
    };
    let ips = api.ips();
    let err = require_err!(ips.list().await);
    assert_eq!(err.to_string(), "Failed to fetch the IP registry");
    let err = require_err!(ips.remove(&EntityId::from(8)).await);
    assert_eq!(err.to_string(), "Failed to delete IP");
}

#[tokio::test]
async fn alerts_feed_is_parsed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/hosts/alerts");
            then.status(200).json_body(json!([
                {"id": 1, "host_id": 2, "hostname": "web-01", "alert_type": "BANNED_IP",
                 "source_ip": "203.0.113.7", "severity": "CRITICAL",
                 "message": "Login from banned IP", "timestamp": "2024-01-01 10:00:00"}
            ]));
        })
        .await;

    let Some(api) = client_for(&server) else {
        panic!("client should build");
    };
    let alerts = require_ok!(api.alerts().list_alerts().await);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);
    assert_eq!(alerts[0].hostname.as_deref(), Some("web-01"));
    assert_eq!(alerts[0].summary(), "Login from banned IP");
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/hosts/ips");
            then.status(200).body("<html>oops</html>");
        })
        .await;

    let Some(api) = client_for(&server) else {
        panic!("client should build");
    };
    let err = require_err!(api.ips().list().await);
    assert!(matches!(err, hostwatch_client::TransportError::Parse { .. }));
}
