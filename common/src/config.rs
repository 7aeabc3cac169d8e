use std::time::Duration;

/// Port the scanner itself is served on; never reported as a discovered service.
pub const DEFAULT_SELF_PORT: u16 = 81;
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(200);
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(10);

pub struct Config {
    /// Suppresses banners and headers. `2` also hides per-result trees.
    pub quiet: u8,
    pub no_banner: bool,
    /// Emit machine readable JSON instead of the terminal tree.
    pub json: bool,
    /// Timeout applied to every single HTTP request of a probe.
    pub probe_timeout: Duration,
    pub self_port: u16,
    /// How long a full scan result is reused before the ports are scanned again.
    pub cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_banner: false,
            json: false,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            self_port: DEFAULT_SELF_PORT,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}
