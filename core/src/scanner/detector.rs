//! Identifies the web service behind a local port using plain HTTP requests.
//!
//! Detection walks through a fixed sequence of probes:
//!
//! 1. `GET /`: any HTTP answer makes the port a valid service; the page
//!    `<title>` names it.
//! 2. `GET /register_service`: optional self description ([`ServiceMetadata`]).
//! 3. Documentation candidates, then the OpenAPI documents next to them, to
//!    find which API paths render a Swagger UI.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};

use companion_common::metadata::{ServiceInfo, ServiceMetadata, UNKNOWN_TITLE};
use companion_protocols::html;
use companion_protocols::http::{HttpProbe, ProbeError};
use companion_protocols::openapi;

use super::ServiceDetector;

pub const REGISTER_SERVICE_PATH: &str = "/register_service";
pub const DOCS_CANDIDATE_URLS: [&str; 2] = ["/docs", "/v1.0/ui/"];
pub const API_CANDIDATE_URLS: [&str; 3] = ["/docs.json", "/openapi.json", "/swagger.json"];

pub struct HttpServiceDetector {
    probe: HttpProbe,
}

impl HttpServiceDetector {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self::with_probe(HttpProbe::new(timeout)?))
    }

    pub fn with_probe(probe: HttpProbe) -> Self {
        Self { probe }
    }

    async fn fetch_metadata(&self, port: u16) -> Option<ServiceMetadata> {
        let response = self.probe.get(port, REGISTER_SERVICE_PATH).await.ok()?;
        if !response.is_ok() {
            return None;
        }

        match serde_json::from_str(&response.body) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                debug!("Port {port} has unreadable service metadata: {e}");
                None
            }
        }
    }

    /// Stops at the first documentation candidate answering `200 OK`.
    /// An error leaves `info` with whatever was found before it.
    async fn collect_documentation(&self, port: u16, info: &mut ServiceInfo) -> Result<(), ProbeError> {
        for docs_path in DOCS_CANDIDATE_URLS {
            if !self.probe.get(port, docs_path).await?.is_ok() {
                continue;
            }
            info.documentation_url = docs_path.to_string();

            for api_path in API_CANDIDATE_URLS {
                let response = self.probe.get(port, api_path).await?;
                if !response.is_ok() {
                    continue;
                }

                for path in openapi::api_paths(&response.json()?)? {
                    let page = self.probe.get(port, &path).await?;
                    if openapi::serves_swagger_ui(&page.body) {
                        info.versions.push(path);
                    }
                }
            }
            break;
        }

        Ok(())
    }
}

#[async_trait]
impl ServiceDetector for HttpServiceDetector {
    async fn detect(&self, port: u16) -> ServiceInfo {
        let mut info = ServiceInfo::unknown(port);

        match self.probe.get(port, "/").await {
            Ok(response) => {
                info.valid = true;
                info.title = html::extract_title(&response.body)
                    .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
            }
            Err(e) => {
                trace!("Port {port} does not speak HTTP: {e}");
                return info;
            }
        }

        info.metadata = self.fetch_metadata(port).await;

        if let Err(e) = self.collect_documentation(port, &mut info).await {
            debug!("Documentation lookup on port {port} stopped: {e}");
        }

        info
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
