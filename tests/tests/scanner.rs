use std::net::{IpAddr, Ipv4Addr, TcpListener};
use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;

use companion_common::config::Config;
use companion_common::network::listener::ListeningSocket;
use companion_core::scanner::detector::HttpServiceDetector;
use companion_core::scanner::ServiceScanner;
use companion_integration_tests::FixedPortSource;

fn scanner(source: FixedPortSource, cfg: &Config) -> ServiceScanner {
    let detector = HttpServiceDetector::new(cfg.probe_timeout).unwrap();
    ServiceScanner::new(Box::new(source), Arc::new(detector), cfg)
}

async fn titled_server(title: &str) -> MockServer {
    let server = MockServer::start_async().await;
    let page = format!("<html><head><title>{title}</title></head></html>");
    server
        .mock_async(move |when, then| {
            when.method(GET).path("/");
            then.status(200).body(page);
        })
        .await;
    server
}

/// Finds web servers among the listening ports and skips everything else.
#[tokio::test]
async fn scan_finds_web_services_only() {
    let beacon = titled_server("Beacon Service").await;
    let commander = titled_server("Commander").await;

    // Accepts connections but never answers HTTP.
    let silent = TcpListener::bind("127.0.0.1:0").unwrap();
    let silent_port = silent.local_addr().unwrap().port();

    let cfg = Config::default();
    let source = FixedPortSource::reachable(&[commander.port(), silent_port, beacon.port()]);
    let services = scanner(source, &cfg).scan_ports().await.unwrap();

    let mut expected = vec![
        (beacon.port(), "Beacon Service"),
        (commander.port(), "Commander"),
    ];
    expected.sort();

    let found: Vec<(u16, &str)> = services.iter().map(|s| (s.port, s.title.as_str())).collect();
    assert_eq!(found, expected);
    assert!(services.iter().all(|s| s.valid));
}

#[tokio::test]
async fn local_only_and_own_ports_are_not_probed() {
    let hidden = MockServer::start_async().await;
    let root = hidden
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("<title>Hidden</title>");
        })
        .await;

    let cfg = Config {
        self_port: hidden.port(),
        ..Config::default()
    };
    let source = FixedPortSource::new(vec![
        ListeningSocket {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: hidden.port(),
        },
        ListeningSocket {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: hidden.port(),
        },
    ]);

    let services = scanner(source, &cfg).scan_ports().await.unwrap();

    assert!(services.is_empty());
    root.assert_hits_async(0).await;
}

#[tokio::test]
async fn repeated_scans_within_ttl_do_not_reprobe() {
    let server = MockServer::start_async().await;
    let root = server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("<title>Helper</title>");
        })
        .await;

    let cfg = Config {
        cache_ttl: Duration::from_secs(60),
        ..Config::default()
    };
    let scanner = scanner(FixedPortSource::reachable(&[server.port()]), &cfg);

    let first = scanner.scan_ports().await.unwrap();
    let second = scanner.scan_ports().await.unwrap();

    assert_eq!(first, second);
    root.assert_hits_async(1).await;
}

#[tokio::test]
async fn scan_results_serialize_with_expected_keys() {
    let server = titled_server("Helper").await;
    let services = scanner(FixedPortSource::reachable(&[server.port()]), &Config::default())
        .scan_ports()
        .await
        .unwrap();

    let value = serde_json::to_value(&services).unwrap();
    let entry = value[0].as_object().unwrap();
    let mut keys: Vec<&str> = entry.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(
        keys,
        ["documentation_url", "metadata", "port", "title", "valid", "versions"]
    );
    assert_eq!(entry["metadata"], serde_json::Value::Null);
}
