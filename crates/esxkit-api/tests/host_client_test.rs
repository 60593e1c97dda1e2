#![allow(clippy::unwrap_used)]
// Integration tests for `HostClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use esxkit_api::models::{DateTimeConfig, OptionValue, ServicePolicy, TypedValue, ValueKind};
use esxkit_api::{Error, HostClient};

const TOKEN: &str = "b00a8f6c-session";

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, HostClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = HostClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

async fn logged_in() -> (MockServer, HostClient) {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/session"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!(TOKEN)))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "secret".to_string().into();
    client.login("root", &secret).await.unwrap();
    (server, client)
}

fn host_path(suffix: &str) -> String {
    format!("/api/hosts/ha-host/{suffix}")
}

// ── Session tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_login_stores_session_token() {
    let (server, client) = logged_in().await;
    assert!(client.is_logged_in());

    Mock::given(method("GET"))
        .and(path("/api/hosts"))
        .and(header("vmware-api-session-id", TOKEN))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "host": "ha-host", "name": "esxi01.lab" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let hosts = client.list_hosts().await.unwrap();
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].host, "ha-host");
}

#[tokio::test]
async fn test_login_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/session"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong".to_string().into();
    let result = client.login("root", &secret).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_logout_clears_session() {
    let (server, client) = logged_in().await;

    Mock::given(method("DELETE"))
        .and(path("/api/session"))
        .and(header("vmware-api-session-id", TOKEN))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.logout().await.unwrap();
    assert!(!client.is_logged_in());

    let result = client.list_hosts().await;
    assert!(matches!(result, Err(Error::NotLoggedIn)));
}

// ── Service tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_services() {
    let (server, client) = logged_in().await;

    Mock::given(method("GET"))
        .and(path(host_path("services")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "key": "ntpd", "label": "NTP Daemon", "running": true, "policy": "on" },
            { "key": "TSM-SSH", "label": "SSH", "running": false, "policy": "off" }
        ])))
        .mount(&server)
        .await;

    let services = client.list_services("ha-host").await.unwrap();
    assert_eq!(services.len(), 2);
    assert_eq!(services[1].key, "TSM-SSH");
    assert!(!services[1].running);
    assert_eq!(services[1].policy, ServicePolicy::Off);
}

#[tokio::test]
async fn test_service_actions_use_query_parameter() {
    let (server, client) = logged_in().await;

    for action in ["start", "stop", "restart"] {
        Mock::given(method("POST"))
            .and(path(host_path("services/TSM-SSH")))
            .and(query_param("action", action))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }

    client.start_service("ha-host", "TSM-SSH").await.unwrap();
    client.stop_service("ha-host", "TSM-SSH").await.unwrap();
    client.restart_service("ha-host", "TSM-SSH").await.unwrap();
}

#[tokio::test]
async fn test_update_service_policy() {
    let (server, client) = logged_in().await;

    Mock::given(method("PUT"))
        .and(path(host_path("services/ntpd/policy")))
        .and(body_json(json!({ "policy": "automatic" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_service_policy("ha-host", "ntpd", ServicePolicy::Automatic)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_fault_envelope_is_surfaced() {
    let (server, client) = logged_in().await;

    Mock::given(method("POST"))
        .and(path(host_path("services/TSM-SSH")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "faultType": "HostConfigFault",
            "message": "service cannot be started"
        })))
        .mount(&server)
        .await;

    let err = client.start_service("ha-host", "TSM-SSH").await.unwrap_err();
    assert!(matches!(err, Error::Fault { status: 500, .. }));
    assert_eq!(err.to_string(), "HostConfigFault: service cannot be started");
}

// ── Date/time tests ─────────────────────────────────────────────────

#[tokio::test]
async fn test_date_time_get_and_update() {
    let (server, client) = logged_in().await;

    Mock::given(method("GET"))
        .and(path(host_path("datetime")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ntpConfig": { "server": ["0.pool.ntp.org", "1.pool.ntp.org"] },
            "timeZone": { "key": "UTC", "name": "UTC", "gmtOffset": 0 }
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(host_path("datetime")))
        .and(body_json(json!({ "timeZone": "Europe/Berlin" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let info = client.get_date_time_info("ha-host").await.unwrap();
    assert_eq!(info.ntp_config.server, vec!["0.pool.ntp.org", "1.pool.ntp.org"]);
    assert_eq!(info.time_zone.name, "UTC");

    client
        .update_date_time_config("ha-host", &DateTimeConfig::time_zone("Europe/Berlin"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_query_available_time_zones() {
    let (server, client) = logged_in().await;

    Mock::given(method("GET"))
        .and(path(host_path("datetime/timezones")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "key": "UTC", "name": "UTC" },
            { "key": "Europe/Berlin", "name": "Europe/Berlin", "gmtOffset": 3600 }
        ])))
        .mount(&server)
        .await;

    let zones = client.query_available_time_zones("ha-host").await.unwrap();
    let names: Vec<&str> = zones.iter().map(|z| z.name.as_str()).collect();
    assert_eq!(names, vec!["UTC", "Europe/Berlin"]);
}

// ── Advanced option tests ───────────────────────────────────────────

#[tokio::test]
async fn test_query_and_update_options() {
    let (server, client) = logged_in().await;

    Mock::given(method("GET"))
        .and(path(host_path("advanced-options")))
        .and(query_param("key", "Misc.HostName"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "key": "Misc.HostName", "value": { "type": "string", "value": "esxi01" } }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(host_path("advanced-options")))
        .and(body_json(json!([
            { "key": "Misc.HostName", "value": { "type": "string", "value": "esxi02" } }
        ])))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let options = client.query_options("ha-host", "Misc.HostName").await.unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value.kind, ValueKind::String);

    let update = OptionValue {
        key: "Misc.HostName".into(),
        value: TypedValue {
            kind: ValueKind::String,
            value: json!("esxi02"),
        },
    };
    client.update_options("ha-host", &[update]).await.unwrap();
}

// ── Inventory tests ─────────────────────────────────────────────────

#[tokio::test]
async fn test_hardware_summary_parses() {
    let (server, client) = logged_in().await;

    Mock::given(method("GET"))
        .and(path(host_path("summary/hardware")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vendor": "Dell Inc.",
            "model": "PowerEdge R640",
            "memorySize": 137_438_953_472_u64,
            "cpuModel": "Intel(R) Xeon(R) Gold 6130",
            "cpuMhz": 2100,
            "numCpuPkgs": 2,
            "numCpuCores": 32,
            "numCpuThreads": 64,
            "numNics": 4,
            "numHBAs": 3
        })))
        .mount(&server)
        .await;

    let hw = client.get_hardware_summary("ha-host").await.unwrap();
    assert_eq!(hw.vendor.as_deref(), Some("Dell Inc."));
    assert_eq!(hw.memory_size, 137_438_953_472);
    assert_eq!(hw.num_hbas, Some(3));
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = logged_in().await;

    Mock::given(method("GET"))
        .and(path(host_path("datastores")))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client.list_datastores("ha-host").await;
    assert!(
        matches!(result, Err(Error::Deserialization { ref body, .. }) if body == "not json"),
        "expected Deserialization error, got: {result:?}"
    );
}
