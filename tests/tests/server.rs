use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use serde_json::Value;
use tower::ServiceExt;

use companion_common::config::Config;
use companion_common::network::listener::ListeningSocket;
use companion_core::scanner::detector::HttpServiceDetector;
use companion_core::scanner::{PortSource, ServiceScanner};
use companion_core::server::{self, WEB_SERVICES_PATHS};
use companion_integration_tests::FixedPortSource;

fn shared_scanner(source: impl PortSource + 'static) -> Arc<ServiceScanner> {
    let cfg = Config::default();
    let detector = HttpServiceDetector::new(cfg.probe_timeout).unwrap();
    Arc::new(ServiceScanner::new(Box::new(source), Arc::new(detector), &cfg))
}

async fn get(scanner: Arc<ServiceScanner>, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = server::router(scanner).oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[tokio::test]
async fn web_services_routes_answer_with_scan_results() {
    let helper = MockServer::start_async().await;
    let root = helper
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("<title>Helper</title>");
        })
        .await;

    let scanner = shared_scanner(FixedPortSource::reachable(&[helper.port()]));

    for path in WEB_SERVICES_PATHS {
        let (status, body) = get(Arc::clone(&scanner), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");

        let services = body.as_array().unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0]["title"], "Helper");
        assert_eq!(services[0]["port"], helper.port());
        assert_eq!(services[0]["valid"], true);
    }

    // Both routes share one scanner and its cache.
    root.assert_hits_async(1).await;
}

#[tokio::test]
async fn root_page_names_the_scanner() {
    let scanner = shared_scanner(FixedPortSource::reachable(&[]));
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = server::router(scanner).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("<title>Service Scanner</title>"));
}

struct UnreadablePorts;

#[async_trait]
impl PortSource for UnreadablePorts {
    async fn listening_sockets(&self) -> anyhow::Result<Vec<ListeningSocket>> {
        anyhow::bail!("no socket tables")
    }
}

#[tokio::test]
async fn failed_scan_is_a_server_error() {
    let (status, body) = get(shared_scanner(UnreadablePorts), WEB_SERVICES_PATHS[0]).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "no socket tables");
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let scanner = shared_scanner(FixedPortSource::reachable(&[]));
    let (status, _) = get(scanner, "/v2.0/web_services").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
