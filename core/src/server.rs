//! HTTP front of the scanner.
//!
//! Serves the cached scan results to the frontend on the same paths the
//! helper service always used, so existing pages keep working.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use companion_common::metadata::ServiceInfo;
use companion_common::services::SERVICE_SCANNER_SERVICE;

use crate::scanner::ServiceScanner;

/// Every path answering with the scan results.
pub const WEB_SERVICES_PATHS: [&str; 2] = ["/v1.0/web_services", "/latest/web_services"];

/// A scan failure, answered as `500 {"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Scan failed: {:#}", self.0);
        let body = Json(json!({ "error": format!("{:#}", self.0) }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub fn router(scanner: Arc<ServiceScanner>) -> Router {
    let mut router = Router::new().route("/", get(index));
    for path in WEB_SERVICES_PATHS {
        router = router.route(path, get(web_services));
    }
    router.with_state(scanner).layer(TraceLayer::new_for_http())
}

/// Binds `0.0.0.0:port` and serves until the process stops.
pub async fn serve(scanner: Arc<ServiceScanner>, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr).await?;
    info!("Serving web services on http://{}", listener.local_addr()?);

    axum::serve(listener, router(scanner)).await?;
    Ok(())
}

async fn web_services(State(scanner): State<Arc<ServiceScanner>>) -> Result<Json<Vec<ServiceInfo>>, ApiError> {
    Ok(Json(scanner.scan_ports().await?))
}

// The title lets a scanner on another port name this service.
async fn index() -> Html<String> {
    Html(format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        SERVICE_SCANNER_SERVICE.name, SERVICE_SCANNER_SERVICE.description
    ))
}
