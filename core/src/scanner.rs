//! The central **abstraction** for service scanning.
//!
//! A scan has two halves, each behind its own trait:
//!
//! * [`PortSource`] answers "which TCP ports are listening right now?"
//! * [`ServiceDetector`] answers "what web service, if any, answers on this port?"
//!
//! [`ServiceScanner`] glues them together, probes every candidate port
//! concurrently and caches the results, so frontends can poll it freely.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use companion_common::config::Config;
use companion_common::metadata::ServiceInfo;
use companion_common::network::listener::ListeningSocket;

use crate::cache::TtlCache;
use crate::system::ProcNetPortSource;

pub mod detector;

use detector::HttpServiceDetector;

/// Lists the TCP sockets currently in the listening state.
#[async_trait]
pub trait PortSource: Send + Sync {
    async fn listening_sockets(&self) -> anyhow::Result<Vec<ListeningSocket>>;
}

/// Identifies the web service listening on a local port.
///
/// Detection never fails: a port without a web server yields an invalid
/// [`ServiceInfo`].
#[async_trait]
pub trait ServiceDetector: Send + Sync {
    async fn detect(&self, port: u16) -> ServiceInfo;
}

/// Called with `(finished, total)` each time a port has been probed.
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

pub struct ServiceScanner {
    ports: Box<dyn PortSource>,
    detector: Arc<dyn ServiceDetector>,
    self_port: u16,
    results: Mutex<TtlCache<Vec<ServiceInfo>>>,
    /// Valid detections, kept for the lifetime of the scanner.
    detections: Mutex<HashMap<u16, ServiceInfo>>,
    on_progress: Option<ProgressCallback>,
}

impl ServiceScanner {
    pub fn new(ports: Box<dyn PortSource>, detector: Arc<dyn ServiceDetector>, cfg: &Config) -> Self {
        Self {
            ports,
            detector,
            self_port: cfg.self_port,
            results: Mutex::new(TtlCache::new(cfg.cache_ttl)),
            detections: Mutex::new(HashMap::new()),
            on_progress: None,
        }
    }

    /// A scanner backed by the kernel socket tables and HTTP probes on localhost.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let detector = HttpServiceDetector::new(cfg.probe_timeout)?;
        Ok(Self::new(Box::new(ProcNetPortSource::new()), Arc::new(detector), cfg))
    }

    pub fn with_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    /// Returns every valid web service listening on an externally reachable
    /// port, ordered by port.
    ///
    /// Results younger than the cache TTL are returned without touching the
    /// network. Concurrent callers wait for the scan in progress.
    pub async fn scan_ports(&self) -> anyhow::Result<Vec<ServiceInfo>> {
        let mut results = self.results.lock().await;
        if let Some(cached) = results.get() {
            debug!("Reusing cached scan of {} services", cached.len());
            return Ok(cached.clone());
        }

        let sockets = self.ports.listening_sockets().await?;
        let ports = candidate_ports(&sockets, self.self_port);
        info!("Probing {} listening ports", ports.len());

        let services = self.detect_all(ports).await;
        info!("Found {} web services", services.len());

        results.insert(services.clone());
        Ok(services)
    }

    /// Drops cached scan results; memoized detections are kept.
    pub async fn invalidate(&self) {
        self.results.lock().await.invalidate();
    }

    async fn detect_all(&self, ports: BTreeSet<u16>) -> Vec<ServiceInfo> {
        let total = ports.len();
        let mut services: Vec<ServiceInfo> = Vec::with_capacity(total);
        let mut tasks: JoinSet<ServiceInfo> = JoinSet::new();

        {
            let memo = self.detections.lock().await;
            for port in ports {
                if let Some(known) = memo.get(&port) {
                    services.push(known.clone());
                    continue;
                }
                let detector = Arc::clone(&self.detector);
                tasks.spawn(async move { detector.detect(port).await });
            }
        }

        let mut finished = services.len();
        self.report_progress(finished, total);

        while let Some(joined) = tasks.join_next().await {
            finished += 1;
            self.report_progress(finished, total);

            match joined {
                Ok(info) if info.valid => {
                    debug!("Port {} serves '{}'", info.port, info.title);
                    self.detections.lock().await.insert(info.port, info.clone());
                    services.push(info);
                }
                Ok(info) => debug!("Port {} is not a web service", info.port),
                Err(e) => warn!("Service detection task failed: {e}"),
            }
        }

        services.sort_by_key(|service| service.port);
        services
    }

    fn report_progress(&self, finished: usize, total: usize) {
        if let Some(callback) = &self.on_progress {
            callback(finished, total);
        }
    }
}

/// Ports reachable by external users, deduplicated, without `self_port`.
pub fn candidate_ports(sockets: &[ListeningSocket], self_port: u16) -> BTreeSet<u16> {
    sockets
        .iter()
        .filter(|socket| socket.is_externally_reachable())
        .map(|socket| socket.port)
        .filter(|port| *port != self_port)
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
