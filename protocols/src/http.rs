use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("OpenAPI document has no 'paths' object")]
    MissingPaths,
}

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ProbeResponse {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    pub fn json(&self) -> Result<Value, ProbeError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Issues `GET` requests against web servers on one host, port by port.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    host: IpAddr,
}

impl HttpProbe {
    /// Probes `127.0.0.1`, applying `timeout` to every request.
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        Self::with_host(IpAddr::V4(Ipv4Addr::LOCALHOST), timeout)
    }

    pub fn with_host(host: IpAddr, timeout: Duration) -> Result<Self, ProbeError> {
        // Local probes must never be routed through an environment proxy.
        let client = Client::builder().timeout(timeout).no_proxy().build()?;
        Ok(Self { client, host })
    }

    pub fn url(&self, port: u16, path: &str) -> String {
        match self.host {
            IpAddr::V4(ip) => format!("http://{ip}:{port}{path}"),
            IpAddr::V6(ip) => format!("http://[{ip}]:{port}{path}"),
        }
    }

    /// Fetches `path` and reads the whole body. Any status code is a success.
    pub async fn get(&self, port: u16, path: &str) -> Result<ProbeResponse, ProbeError> {
        let url = self.url(port, path);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        trace!("GET {url} -> {status}");

        Ok(ProbeResponse { status, body })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
